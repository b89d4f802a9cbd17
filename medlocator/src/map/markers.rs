//! Marker and overlay model types.

use crate::location::UserFix;
use crate::registry::HospitalRecord;

/// Hospital marker with its popup content.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalMarker {
    /// The record the marker stands for.
    pub record: HospitalRecord,
    /// Distance line shown in the popup once a route has been drawn.
    pub distance_km: Option<f64>,
    /// Whether the popup is open.
    pub popup_open: bool,
}

impl HospitalMarker {
    /// Marker for a freshly selected hospital, popup open, no distance yet.
    pub fn new(record: HospitalRecord) -> Self {
        Self {
            record,
            distance_km: None,
            popup_open: true,
        }
    }

    /// Popup lines in display order.
    pub fn popup_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.record.name.clone(),
            self.record.category.clone(),
            self.record.contact.clone(),
            self.record.description.clone(),
        ];
        if let Some(km) = self.distance_km {
            lines.push(format!(
                "Distance from you: {} km",
                crate::geo::format_distance_km(km)
            ));
        }
        lines
    }
}

/// User marker with accuracy circle.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMarker {
    /// The fix the marker stands for.
    pub fix: UserFix,
    /// Whether the popup is open.
    pub popup_open: bool,
}

impl UserMarker {
    /// Marker for a fresh fix, popup open.
    pub fn new(fix: UserFix) -> Self {
        Self {
            fix,
            popup_open: true,
        }
    }

    /// Radius of the translucent accuracy circle, in meters.
    #[inline]
    pub fn circle_radius_m(&self) -> f64 {
        self.fix.accuracy_m
    }

    /// Popup lines in display order.
    pub fn popup_lines(&self) -> Vec<String> {
        vec![
            "Your current location".to_string(),
            format!("Accuracy: {} meters", self.fix.accuracy_m.round() as i64),
        ]
    }
}

/// Straight dashed line between the user and the selected hospital.
///
/// A visual distance indicator only; callers must not assume turn-by-turn
/// correctness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLine {
    /// User endpoint as `(latitude, longitude)`.
    pub from: (f64, f64),
    /// Hospital endpoint as `(latitude, longitude)`.
    pub to: (f64, f64),
    /// Great-circle distance between the endpoints, in kilometers.
    pub distance_km: f64,
}
