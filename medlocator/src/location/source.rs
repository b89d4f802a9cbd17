//! Location source capability trait.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::error::WatchError;
use super::state::{WatchEvent, WatchOptions};

/// Injectable device geolocation capability.
///
/// A source delivers [`WatchEvent`]s on the provided channel until the
/// cancellation token fires or the receiver is dropped. Implementations must
/// never panic across this boundary; failures are classified into
/// [`WatchError`] variants and sent as events.
pub trait LocationSource: Send + Sync {
    /// Whether the device location capability is present.
    ///
    /// Checked once at startup. When false, [`LocationSource::start_watch`]
    /// is never called and the UI disables the locate control permanently.
    fn is_supported(&self) -> bool;

    /// Begin a continuous watch (not a one-shot fix).
    ///
    /// Spawns delivery in the background; `cancel` stops it. Must be called
    /// from within a tokio runtime.
    fn start_watch(
        &self,
        options: WatchOptions,
        events: mpsc::Sender<WatchEvent>,
        cancel: CancellationToken,
    );
}

/// A source for devices without any geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocationSource;

impl LocationSource for UnsupportedLocationSource {
    fn is_supported(&self) -> bool {
        false
    }

    fn start_watch(
        &self,
        _options: WatchOptions,
        events: mpsc::Sender<WatchEvent>,
        _cancel: CancellationToken,
    ) {
        // Callers should have checked is_supported(); answer consistently
        // anyway rather than going silent.
        let _ = events.try_send(WatchEvent::Error(WatchError::Unsupported));
    }
}
