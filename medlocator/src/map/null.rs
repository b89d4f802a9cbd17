//! No-operation map view.

use super::view::MapView;
use crate::location::UserFix;
use crate::registry::HospitalRecord;

/// A map view that discards all operations.
///
/// Useful for headless runs and for tests that exercise controller logic
/// without caring what the map would show.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMapView;

impl MapView for NullMapView {
    #[inline]
    fn show_hospital(&mut self, _record: &HospitalRecord) {}

    #[inline]
    fn show_user(&mut self, _fix: &UserFix) {}

    #[inline]
    fn draw_route(&mut self, _fix: &UserFix, _record: &HospitalRecord) {}

    #[inline]
    fn clear_hospital(&mut self) {}

    #[inline]
    fn reset(&mut self) {}
}
