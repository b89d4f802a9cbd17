//! Search input bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Widget displaying the current search text with a cursor.
pub struct SearchBarWidget<'a> {
    query: &'a str,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}

impl Widget for SearchBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.query.is_empty() {
            Line::from(vec![
                Span::styled("▏", Style::default().fg(Color::White)),
                Span::styled(
                    "Search for hospitals...",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw(self.query),
                Span::styled("▏", Style::default().fg(Color::White)),
            ])
        };

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title(" Search "))
            .render(area, buf);
    }
}
