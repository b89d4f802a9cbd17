//! Textual rendering of the map model.
//!
//! The terminal has no tile renderer; this panel shows the viewport and the
//! marker popups the map would display.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use medlocator::map::ModelMapView;

/// Widget displaying the map viewport, markers, and route line.
pub struct MapPanelWidget<'a> {
    map: &'a ModelMapView,
}

impl<'a> MapPanelWidget<'a> {
    pub fn new(map: &'a ModelMapView) -> Self {
        Self { map }
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Cyan)))
}

impl Widget for MapPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.map.viewport();
        let mut lines = vec![Line::from(Span::raw(format!(
            "Center {:.4}, {:.4}  zoom {}",
            viewport.center.0, viewport.center.1, viewport.zoom
        )))];

        if let Some(marker) = self.map.hospital_marker() {
            lines.push(Line::default());
            lines.push(heading("📍 Hospital"));
            for popup_line in marker.popup_lines() {
                lines.push(Line::from(Span::raw(format!("  {}", popup_line))));
            }
        }

        if let Some(marker) = self.map.user_marker() {
            lines.push(Line::default());
            lines.push(heading("◎ You"));
            for popup_line in marker.popup_lines() {
                lines.push(Line::from(Span::raw(format!("  {}", popup_line))));
            }
        }

        if let Some(route) = self.map.route_line() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "─ ─ ─ route {:.4},{:.4} to {:.4},{:.4} ({:.1} km)",
                    route.from.0, route.from.1, route.to.0, route.to.1, route.distance_km
                ),
                Style::default().fg(Color::Blue),
            )));
        }

        if self.map.hospital_marker().is_none() && self.map.user_marker().is_none() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Type to search, Enter to select a hospital",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Map "))
            .render(area, buf);
    }
}
