//! Map view trait and viewport type.

use crate::location::UserFix;
use crate::registry::HospitalRecord;

/// Map viewport: center coordinates and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center as `(latitude, longitude)`.
    pub center: (f64, f64),
    /// Tile zoom level.
    pub zoom: u8,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Viewport that shows both points with padding.
    ///
    /// Center is the midpoint; zoom steps down with the great-circle span so
    /// both endpoints stay inside the view. Deterministic stand-in for a
    /// renderer's fit-bounds operation.
    pub fn fit(a: (f64, f64), b: (f64, f64)) -> Self {
        let center = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        let span_km = crate::geo::distance_km(a.0, a.1, b.0, b.1);
        let zoom = if span_km < 2.0 {
            15
        } else if span_km < 5.0 {
            14
        } else if span_km < 10.0 {
            13
        } else if span_km < 20.0 {
            12
        } else if span_km < 40.0 {
            11
        } else {
            10
        };
        Self { center, zoom }
    }
}

/// Renderer-independent map operations.
///
/// Translates selection state into markers and overlays. None of these
/// operations can fail under normal conditions: they operate on
/// already-validated coordinate data, and rendering-layer internals are the
/// implementation's concern.
pub trait MapView {
    /// Place the hospital marker with an open popup and center the view on
    /// it at a close zoom. Replaces any prior hospital marker and removes
    /// any route line.
    fn show_hospital(&mut self, record: &HospitalRecord);

    /// Place the user marker and accuracy circle with an open popup stating
    /// the accuracy. Replaces any prior user marker/circle.
    fn show_user(&mut self, fix: &UserFix);

    /// Draw the straight dashed line between user and hospital, recompute
    /// the distance into the hospital popup, and fit the viewport to both
    /// points. Replaces any prior route line.
    ///
    /// This is a straight-line indicator, not a road-network route.
    fn draw_route(&mut self, fix: &UserFix, record: &HospitalRecord);

    /// Remove the hospital marker and any route line, keeping the user
    /// marker. Used when the selection is cleared without a full reset.
    fn clear_hospital(&mut self);

    /// Return to the initial center/zoom, close all popups, and remove all
    /// markers and the route line.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_on_midpoint() {
        let viewport = Viewport::fit((0.0, 32.0), (0.2, 32.4));
        assert!((viewport.center.0 - 0.1).abs() < 1e-12);
        assert!((viewport.center.1 - 32.2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_zoom_shrinks_with_span() {
        let near = Viewport::fit((0.3476, 32.5825), (0.3500, 32.5850));
        let far = Viewport::fit((0.3476, 32.5825), (1.0, 33.5));
        assert!(near.zoom > far.zoom);
        assert_eq!(near.zoom, 15);
    }

    #[test]
    fn test_fit_kampala_hospital_span() {
        // Mulago to Mengo is ~6 km: fits at zoom 13.
        let viewport = Viewport::fit((0.3476, 32.5825), (0.2997, 32.5569));
        assert_eq!(viewport.zoom, 13);
    }
}
