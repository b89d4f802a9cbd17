//! Bottom status line with key help.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use medlocator::controller::{LocateControl, Status, StatusSeverity};

/// Widget displaying the status message and the locate control state.
pub struct StatusLineWidget<'a> {
    status: &'a Status,
    locate: LocateControl,
}

impl<'a> StatusLineWidget<'a> {
    pub fn new(status: &'a Status, locate: LocateControl) -> Self {
        Self { status, locate }
    }

    fn severity_color(&self) -> Color {
        match self.status.severity {
            StatusSeverity::Loading => Color::Yellow,
            StatusSeverity::Success => Color::Green,
            StatusSeverity::Error => Color::Red,
        }
    }
}

impl Widget for StatusLineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let locate_style = if self.locate.enabled() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled(
                self.status.text.clone(),
                Style::default().fg(self.severity_color()),
            ),
            Span::raw("  |  "),
            Span::styled(format!("Ctrl+L {}", self.locate.label()), locate_style),
            Span::styled(
                "  Ctrl+N navigate  Ctrl+R reset  Tab list  Ctrl+Q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
