//! Detail panel for the selected hospital and the current fix.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use medlocator::location::UserFix;
use medlocator::registry::HospitalRecord;

/// Widget displaying the selected hospital and the user's position.
pub struct InfoPanelWidget<'a> {
    selected: Option<&'a HospitalRecord>,
    user_fix: Option<&'a UserFix>,
    can_navigate: bool,
}

impl<'a> InfoPanelWidget<'a> {
    pub fn new(
        selected: Option<&'a HospitalRecord>,
        user_fix: Option<&'a UserFix>,
        can_navigate: bool,
    ) -> Self {
        Self {
            selected,
            user_fix,
            can_navigate,
        }
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::Cyan))
}

fn dim(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

impl Widget for InfoPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        match self.selected {
            Some(record) => {
                lines.push(Line::from(vec![
                    label("Selected: "),
                    Span::raw(record.name.clone()),
                ]));
                lines.push(Line::from(Span::raw(format!(
                    "  {} | {:.6}, {:.6}",
                    record.category, record.latitude, record.longitude
                ))));
                lines.push(Line::from(Span::raw(format!("  {}", record.contact))));
            }
            None => lines.push(Line::from(vec![
                label("Selected: "),
                dim("none"),
            ])),
        }

        lines.push(Line::default());

        match self.user_fix {
            Some(fix) => {
                lines.push(Line::from(vec![
                    label("You: "),
                    Span::raw(format!("{:.6}, {:.6}", fix.latitude, fix.longitude)),
                ]));
                lines.push(Line::from(Span::raw(format!(
                    "  Accuracy: {} meters",
                    fix.accuracy_m.round() as i64
                ))));
            }
            None => lines.push(Line::from(vec![label("You: "), dim("no location yet")])),
        }

        if self.can_navigate {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Ctrl+N to navigate",
                Style::default().fg(Color::Green),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Details "))
            .render(area, buf);
    }
}
