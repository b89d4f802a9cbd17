//! Watch error taxonomy.

/// Classified geolocation failures.
///
/// The display strings are the exact human-readable status messages surfaced
/// to the user; diagnostic detail goes to the log, not the status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// The user (or platform policy) denied location access.
    #[error("Location access denied. Please enable location services.")]
    PermissionDenied,

    /// The device could not determine a position.
    #[error("Location information unavailable.")]
    PositionUnavailable,

    /// No fix arrived within the configured timeout.
    #[error("Location request timed out.")]
    Timeout,

    /// The location capability is absent on this device.
    ///
    /// Detected once at startup; the locate control stays disabled for the
    /// whole session.
    #[error("Geolocation is not supported on this device")]
    Unsupported,

    /// Anything the source could not classify. The payload is logged but
    /// not shown to the user.
    #[error("An unknown error occurred.")]
    Unknown(String),
}

impl WatchError {
    /// True if retrying can possibly succeed.
    ///
    /// Everything except capability absence is retryable; the UI re-enables
    /// the locate control after these.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, WatchError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            WatchError::PermissionDenied.to_string(),
            "Location access denied. Please enable location services."
        );
        assert_eq!(
            WatchError::PositionUnavailable.to_string(),
            "Location information unavailable."
        );
        assert_eq!(
            WatchError::Timeout.to_string(),
            "Location request timed out."
        );
        assert_eq!(
            WatchError::Unknown("driver exploded".into()).to_string(),
            "An unknown error occurred."
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(WatchError::PermissionDenied.is_retryable());
        assert!(WatchError::PositionUnavailable.is_retryable());
        assert!(WatchError::Timeout.is_retryable());
        assert!(WatchError::Unknown(String::new()).is_retryable());
        assert!(!WatchError::Unsupported.is_retryable());
    }
}
