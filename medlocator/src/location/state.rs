//! Fix and watch option types.

use std::time::{Duration, Instant};

use super::error::WatchError;

/// A single reported device location.
///
/// Replaced wholesale on each successful geolocation callback; no history is
/// retained.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFix {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Reported accuracy radius in meters.
    pub accuracy_m: f64,
    /// When this fix was delivered.
    pub timestamp: Instant,
}

impl UserFix {
    /// Create a fix timestamped now.
    pub fn new(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
            timestamp: Instant::now(),
        }
    }

    /// Coordinates as a `(latitude, longitude)` pair.
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Get the age of this fix (time since delivery).
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }
}

/// Events delivered by an active watch.
///
/// Success and failure share one channel so consumers handle both in a
/// single place.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A successful position fix.
    Fix(UserFix),
    /// A classified failure. The watch may keep running and recover.
    Error(WatchError),
}

/// Options for a continuous location watch.
///
/// Mirrors the device geolocation API's position options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Prefer high-accuracy positioning (GPS over network).
    pub high_accuracy: bool,
    /// How long a single fix attempt may take before failing with
    /// [`WatchError::Timeout`].
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix.
    pub maximum_age: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}
