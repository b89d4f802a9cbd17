//! In-memory map view model.

use tracing::debug;

use super::markers::{HospitalMarker, RouteLine, UserMarker};
use super::view::{MapView, Viewport};
use crate::location::UserFix;
use crate::registry::HospitalRecord;

/// An in-memory model of what a map surface would display.
///
/// Holds the viewport plus at most one hospital marker, one user
/// marker/accuracy circle, and one route line. Renderers (the TUI map panel)
/// draw from this state; tests assert against it directly.
#[derive(Debug, Clone)]
pub struct ModelMapView {
    initial: Viewport,
    viewport: Viewport,
    focus_zoom: u8,
    hospital: Option<HospitalMarker>,
    user: Option<UserMarker>,
    route: Option<RouteLine>,
}

impl ModelMapView {
    /// Default zoom when centering on a selected hospital.
    pub const DEFAULT_FOCUS_ZOOM: u8 = 15;

    /// Create a map model at the given initial viewport.
    pub fn new(initial: Viewport) -> Self {
        Self {
            initial,
            viewport: initial,
            focus_zoom: Self::DEFAULT_FOCUS_ZOOM,
            hospital: None,
            user: None,
            route: None,
        }
    }

    /// Override the zoom used when focusing a hospital.
    pub fn with_focus_zoom(mut self, zoom: u8) -> Self {
        self.focus_zoom = zoom;
        self
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The viewport the map started at (and returns to on reset).
    pub fn initial_viewport(&self) -> Viewport {
        self.initial
    }

    /// Current hospital marker, if any.
    pub fn hospital_marker(&self) -> Option<&HospitalMarker> {
        self.hospital.as_ref()
    }

    /// Current user marker, if any.
    pub fn user_marker(&self) -> Option<&UserMarker> {
        self.user.as_ref()
    }

    /// Current route line, if any.
    pub fn route_line(&self) -> Option<&RouteLine> {
        self.route.as_ref()
    }
}

impl MapView for ModelMapView {
    fn show_hospital(&mut self, record: &HospitalRecord) {
        // Rebuild, never patch: prior hospital marker and route go away.
        self.route = None;
        self.hospital = Some(HospitalMarker::new(record.clone()));
        self.viewport = Viewport::new(record.coords(), self.focus_zoom);
        debug!(hospital = %record.name, zoom = self.focus_zoom, "Map centered on hospital");
    }

    fn show_user(&mut self, fix: &UserFix) {
        self.user = Some(UserMarker::new(fix.clone()));
    }

    fn draw_route(&mut self, fix: &UserFix, record: &HospitalRecord) {
        let distance_km =
            crate::geo::distance_km(fix.latitude, fix.longitude, record.latitude, record.longitude);

        self.route = Some(RouteLine {
            from: fix.coords(),
            to: record.coords(),
            distance_km,
        });

        // Refresh the hospital popup with the distance line.
        let mut marker = self
            .hospital
            .take()
            .unwrap_or_else(|| HospitalMarker::new(record.clone()));
        marker.distance_km = Some(distance_km);
        marker.popup_open = true;
        self.hospital = Some(marker);

        self.viewport = Viewport::fit(fix.coords(), record.coords());
        debug!(
            hospital = %record.name,
            distance_km = format!("{distance_km:.1}").as_str(),
            "Route drawn"
        );
    }

    fn clear_hospital(&mut self) {
        self.hospital = None;
        self.route = None;
    }

    fn reset(&mut self) {
        self.viewport = self.initial;
        self.hospital = None;
        self.user = None;
        self.route = None;
        debug!("Map reset to initial view");
    }
}
