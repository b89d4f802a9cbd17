//! Dashboard layout orchestration.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::ui::app::LocatorApp;
use crate::ui::widgets::{
    HospitalListWidget, InfoPanelWidget, MapPanelWidget, SearchBarWidget, StatusLineWidget,
};

/// Draw the whole dashboard.
///
/// Layout: search bar on top, map (plus an optional list/details column) in
/// the middle, status line at the bottom.
pub fn draw(frame: &mut Frame, app: &LocatorApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(SearchBarWidget::new(app.locator.query()), rows[0]);
    draw_main(frame, app, rows[1]);
    frame.render_widget(
        StatusLineWidget::new(app.locator.status(), app.locator.locate_control()),
        rows[2],
    );
}

fn draw_main(frame: &mut Frame, app: &LocatorApp, area: Rect) {
    if !app.panel_visible() {
        frame.render_widget(MapPanelWidget::new(app.locator.map()), area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(10)])
        .split(columns[0]);

    let records = app.locator.visible_records();
    let selected_name = app.locator.selected().map(|r| r.name.as_str());
    frame.render_widget(
        HospitalListWidget::new(&records, selected_name, app.cursor()),
        side[0],
    );
    frame.render_widget(
        InfoPanelWidget::new(
            app.locator.selected(),
            app.locator.user_fix(),
            app.locator.can_navigate(),
        ),
        side[1],
    );
    frame.render_widget(MapPanelWidget::new(app.locator.map()), columns[1]);
}
