//! Filtered hospital list panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use medlocator::registry::HospitalRecord;

/// Widget displaying the visible hospitals with the cursor row highlighted.
pub struct HospitalListWidget<'a> {
    records: &'a [&'a HospitalRecord],
    selected_name: Option<&'a str>,
    cursor: usize,
}

impl<'a> HospitalListWidget<'a> {
    pub fn new(
        records: &'a [&'a HospitalRecord],
        selected_name: Option<&'a str>,
        cursor: usize,
    ) -> Self {
        Self {
            records,
            selected_name,
            cursor,
        }
    }
}

impl Widget for HospitalListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Hospitals ({}) ", self.records.len()));

        if self.records.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No hospitals found",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| {
                let selected = self.selected_name == Some(record.name.as_str());
                let marker = if selected { "● " } else { "  " };
                let style = if selected {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(record.name.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(Some(self.cursor.min(self.records.len() - 1)));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
