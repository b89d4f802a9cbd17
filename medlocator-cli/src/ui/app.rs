//! Dashboard input handling and per-tick updates (no rendering dependencies).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use medlocator::controller::LocatorController;
use medlocator::map::ModelMapView;

/// Dashboard state: the locator controller plus terminal-only concerns
/// (list cursor, panel visibility, quit flag).
pub struct LocatorApp {
    pub locator: LocatorController<ModelMapView>,
    /// Cursor position within the visible (filtered) hospital list.
    cursor: usize,
    /// Whether the hospital list panel is shown.
    panel_visible: bool,
    should_quit: bool,
}

impl LocatorApp {
    pub fn new(locator: LocatorController<ModelMapView>) -> Self {
        Self {
            locator,
            cursor: 0,
            panel_visible: true,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Cursor position, clamped to the visible list.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.locator.visible_len().saturating_sub(1))
    }

    /// Apply one key press.
    ///
    /// Plain characters feed the search box, so every command is a control
    /// chord or a non-character key.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('l') => self.locator.request_location(),
                KeyCode::Char('n') => self.locator.navigate(),
                KeyCode::Char('r') => {
                    self.locator.reset();
                    self.cursor = 0;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.set_query(String::new()),
            KeyCode::Tab => self.panel_visible = !self.panel_visible,
            KeyCode::Up => self.cursor = self.cursor().saturating_sub(1),
            KeyCode::Down => {
                let last = self.locator.visible_len().saturating_sub(1);
                self.cursor = (self.cursor() + 1).min(last);
            }
            KeyCode::Enter => {
                if self.locator.visible_len() > 0 {
                    self.locator.select_visible(self.cursor());
                }
            }
            KeyCode::Backspace => {
                let mut query = self.locator.query().to_string();
                query.pop();
                self.set_query(query);
            }
            KeyCode::Char(c) => {
                let mut query = self.locator.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            _ => {}
        }
    }

    fn set_query(&mut self, query: String) {
        self.locator.handle_search(&query);
        self.cursor = 0;
    }

    /// Per-tick update: apply any pending location watch events.
    ///
    /// Returns true if anything changed.
    pub fn on_tick(&mut self) -> bool {
        self.locator.pump_location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use medlocator::config::LocatorConfig;
    use medlocator::location::UnsupportedLocationSource;
    use medlocator::registry::Registry;

    fn app() -> LocatorApp {
        let config = LocatorConfig::default();
        LocatorApp::new(LocatorController::new(
            Registry::builtin(),
            ModelMapView::new(config.initial_viewport()),
            Arc::new(UnsupportedLocationSource),
            config,
        ))
    }

    fn press(app: &mut LocatorApp, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn chord(app: &mut LocatorApp, c: char) {
        app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut LocatorApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_filters_and_backspace_widens() {
        let mut app = app();
        type_text(&mut app, "mulago");
        assert_eq!(app.locator.query(), "mulago");
        assert_eq!(app.locator.visible_len(), 1);
        assert!(app.locator.selected().is_some());

        for _ in 0.."mulago".len() {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.locator.query(), "");
        assert_eq!(app.locator.visible_len(), 6);
    }

    #[test]
    fn test_escape_clears_search() {
        let mut app = app();
        type_text(&mut app, "zzz");
        assert_eq!(app.locator.visible_len(), 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.locator.query(), "");
        assert_eq!(app.locator.visible_len(), 6);
    }

    #[test]
    fn test_cursor_moves_and_enter_selects() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), 2);

        press(&mut app, KeyCode::Enter);
        let expected = Registry::builtin().get_index(2).unwrap().name.clone();
        assert_eq!(app.locator.selected().unwrap().name, expected);
    }

    #[test]
    fn test_cursor_clamps_when_filter_shrinks_list() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor(), 5);

        type_text(&mut app, "k"); // Kawempe + Kibuli
        assert_eq!(app.locator.visible_len(), 2);
        assert_eq!(app.cursor(), 0);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn test_tab_toggles_panel() {
        let mut app = app();
        assert!(app.panel_visible());
        press(&mut app, KeyCode::Tab);
        assert!(!app.panel_visible());
        press(&mut app, KeyCode::Tab);
        assert!(app.panel_visible());
    }

    #[test]
    fn test_ctrl_chords_do_not_touch_search() {
        let mut app = app();
        chord(&mut app, 'n');
        assert_eq!(app.locator.query(), "");
        assert_eq!(
            app.locator.status().text,
            "Please select a hospital first"
        );

        chord(&mut app, 'r');
        assert_eq!(app.locator.status().text, "Map view reset");

        chord(&mut app, 'q');
        assert!(app.should_quit());
    }
}
