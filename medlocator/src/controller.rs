//! Locator controller - wires input events to state and presentation.
//!
//! Control flow per event: user input (search text, list click, button) →
//! [`SelectionState`] mutation → [`MapView`] re-render → status update. All
//! handling is single-threaded; the only asynchronous input is the location
//! watch, whose pending events the UI drains through
//! [`LocatorController::pump_location`] on its own thread.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::LocatorConfig;
use crate::location::{GeolocationWatcher, LocationSource, UserFix, WatchError, WatchEvent};
use crate::map::MapView;
use crate::registry::{HospitalRecord, Registry};
use crate::selection::SelectionState;

/// Severity of a status message, driving its display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    /// An operation is in flight.
    Loading,
    /// The last operation succeeded.
    Success,
    /// The last operation failed or was declined.
    Error,
}

/// A single-line user-facing status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub severity: StatusSeverity,
}

impl Status {
    fn loading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: StatusSeverity::Loading,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: StatusSeverity::Success,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: StatusSeverity::Error,
        }
    }
}

/// State of the locate control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateControl {
    /// No fix yet; a request can be made.
    Idle,
    /// A location request is in flight; the control is disabled.
    InFlight,
    /// A fix is held; requesting again refreshes it.
    HaveFix,
    /// Capability absent; disabled for the whole session.
    Unsupported,
}

impl LocateControl {
    /// Whether the control accepts a press.
    pub fn enabled(&self) -> bool {
        matches!(self, LocateControl::Idle | LocateControl::HaveFix)
    }

    /// Display label for the control.
    pub fn label(&self) -> &'static str {
        match self {
            LocateControl::Idle => "Show My Current Location",
            LocateControl::InFlight => "Locating...",
            LocateControl::HaveFix => "Update My Location",
            LocateControl::Unsupported => "Location Not Supported",
        }
    }
}

/// Owns the registry, selection state, map view, and location watch, and
/// applies every user-facing operation of the locator.
pub struct LocatorController<M: MapView> {
    registry: Registry,
    state: SelectionState,
    map: M,
    watcher: GeolocationWatcher,
    status: Status,
    locate: LocateControl,
    query: String,
    visible: Vec<usize>,
}

impl<M: MapView> LocatorController<M> {
    /// Create a controller.
    ///
    /// Capability absence is detected here, once: with an unsupported
    /// source the locate control is disabled for the session and the fixed
    /// explanatory status is shown.
    pub fn new(
        registry: Registry,
        map: M,
        source: Arc<dyn LocationSource>,
        config: LocatorConfig,
    ) -> Self {
        let watcher = GeolocationWatcher::new(source, config.watch);
        let (locate, status) = if watcher.is_supported() {
            (LocateControl::Idle, Status::success("Ready"))
        } else {
            (
                LocateControl::Unsupported,
                Status::error(WatchError::Unsupported.to_string()),
            )
        };
        let visible = (0..registry.len()).collect();

        Self {
            registry,
            state: SelectionState::new(),
            map,
            watcher,
            status,
            locate,
            query: String::new(),
            visible,
        }
    }

    /// The registry backing the list.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The map view, for rendering.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Current status line.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Current locate control state.
    pub fn locate_control(&self) -> LocateControl {
        self.locate
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The currently selected hospital, if any.
    pub fn selected(&self) -> Option<&HospitalRecord> {
        self.state.selected()
    }

    /// The most recent user fix, if any.
    pub fn user_fix(&self) -> Option<&UserFix> {
        self.state.user_fix()
    }

    /// True iff both a hospital and a user fix are present.
    pub fn can_navigate(&self) -> bool {
        self.state.can_navigate()
    }

    /// Records currently visible in the list (the filtered view), in
    /// registry order.
    pub fn visible_records(&self) -> Vec<&HospitalRecord> {
        self.visible
            .iter()
            .filter_map(|&i| self.registry.get_index(i))
            .collect()
    }

    /// Number of visible records.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Apply a search query.
    ///
    /// Exactly one match auto-selects it, as if the user clicked it. Zero or
    /// multiple matches clear any prior selection and hospital markers. An
    /// empty query restores the full unfiltered list (also clearing the
    /// selection).
    pub fn handle_search(&mut self, query: &str) {
        self.query = query.to_string();

        if query.trim().is_empty() {
            self.visible = (0..self.registry.len()).collect();
            self.clear_selection_view();
            return;
        }

        self.visible = self.registry.search_indices(query);
        if self.visible.len() == 1 {
            let index = self.visible[0];
            self.select_registry_index(index);
        } else {
            self.clear_selection_view();
        }
    }

    /// Select the record at a position in the *visible* list.
    ///
    /// Returns false if the position is out of range.
    pub fn select_visible(&mut self, position: usize) -> bool {
        match self.visible.get(position).copied() {
            Some(index) => self.select_registry_index(index),
            None => false,
        }
    }

    /// Select a record by exact name (case-insensitive).
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let index = self
            .registry
            .records()
            .iter()
            .position(|r| r.name.eq_ignore_ascii_case(name));
        match index {
            Some(index) => self.select_registry_index(index),
            None => false,
        }
    }

    fn select_registry_index(&mut self, index: usize) -> bool {
        let Some(record) = self.registry.get_index(index).cloned() else {
            return false;
        };
        info!(hospital = %record.name, "Hospital selected");
        self.map.show_hospital(&record);
        self.state.select(record);
        true
    }

    fn clear_selection_view(&mut self) {
        if self.state.selected().is_some() {
            self.state.clear_selection();
        }
        self.map.clear_hospital();
    }

    /// Request the user's location (continuous watch).
    ///
    /// Starting a new watch cancels any prior one. With an unsupported
    /// source this only restates the fixed status; the control never
    /// enables.
    pub fn request_location(&mut self) {
        if !self.watcher.is_supported() {
            self.status = Status::error(WatchError::Unsupported.to_string());
            return;
        }

        self.status = Status::loading("Getting your location...");
        self.locate = LocateControl::InFlight;
        self.watcher.start();
    }

    /// Drain pending watch events and apply them.
    ///
    /// Called from the UI loop on its single thread, keeping all mutation
    /// serialized. Returns true if anything changed.
    pub fn pump_location(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.watcher.try_next_event() {
            match event {
                WatchEvent::Fix(fix) => self.apply_fix(fix),
                WatchEvent::Error(error) => self.apply_watch_error(error),
            }
            changed = true;
        }
        changed
    }

    fn apply_fix(&mut self, fix: UserFix) {
        info!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            accuracy_m = fix.accuracy_m,
            "Location fix received"
        );
        self.map.show_user(&fix);
        self.state.set_fix(fix);
        self.status = Status::success("Location found!");
        self.locate = LocateControl::HaveFix;
    }

    fn apply_watch_error(&mut self, error: WatchError) {
        warn!(error = %error, "Location watch error");
        self.status = Status::error(error.to_string());
        // Re-enable the control after any retryable failure.
        self.locate = if !error.is_retryable() {
            LocateControl::Unsupported
        } else if self.state.user_fix().is_some() {
            LocateControl::HaveFix
        } else {
            LocateControl::Idle
        };
    }

    /// Draw the straight-line route to the selected hospital.
    ///
    /// Declined with an error status (no panic) when either the selection or
    /// the user fix is missing.
    pub fn navigate(&mut self) {
        let Some(record) = self.state.selected().cloned() else {
            self.status = Status::error("Please select a hospital first");
            return;
        };
        let Some(fix) = self.state.user_fix().cloned() else {
            self.status = Status::error("Please get your current location first");
            return;
        };

        self.map.draw_route(&fix, &record);
        let distance_km = crate::geo::distance_km(
            fix.latitude,
            fix.longitude,
            record.latitude,
            record.longitude,
        );
        self.status = Status::success(format!(
            "Navigation to {} - Distance: {} km",
            record.name,
            crate::geo::format_distance_km(distance_km)
        ));
    }

    /// Reset: initial map view, all selection state and markers cleared,
    /// any active watch cancelled, search text cleared.
    pub fn reset(&mut self) {
        self.watcher.stop();
        self.map.reset();
        self.state.clear_all();
        self.query.clear();
        self.visible = (0..self.registry.len()).collect();
        if self.locate != LocateControl::Unsupported {
            self.locate = LocateControl::Idle;
        }
        self.status = Status::success("Map view reset");
    }
}
