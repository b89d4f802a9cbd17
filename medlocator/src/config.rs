//! Locator configuration.

use crate::location::WatchOptions;
use crate::map::Viewport;

/// Initial map center: Mulago National Referral Hospital, Kampala.
pub const INITIAL_CENTER: (f64, f64) = (0.3476, 32.5825);

/// Initial map zoom.
pub const INITIAL_ZOOM: u8 = 12;

/// Zoom used when centering on a selected hospital.
pub const FOCUS_ZOOM: u8 = 15;

/// Configuration for the locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatorConfig {
    /// Initial map center as `(latitude, longitude)`.
    pub initial_center: (f64, f64),
    /// Initial map zoom level.
    pub initial_zoom: u8,
    /// Zoom when focusing a selected hospital.
    pub focus_zoom: u8,
    /// Options every location watch is started with.
    pub watch: WatchOptions,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            focus_zoom: FOCUS_ZOOM,
            watch: WatchOptions::default(),
        }
    }
}

impl LocatorConfig {
    /// The viewport the map starts at (and resets to).
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.initial_center, self.initial_zoom)
    }
}
