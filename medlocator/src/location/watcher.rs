//! Geolocation watcher - single-watch lifecycle over a location source.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::source::LocationSource;
use super::state::{WatchEvent, WatchOptions};

/// Buffered events per watch. Fixes arrive at human timescales; a small
/// buffer is plenty and stale backlog is dropped with the watch anyway.
const EVENT_CHANNEL_CAPACITY: usize = 16;

struct ActiveWatch {
    cancel: CancellationToken,
    events: mpsc::Receiver<WatchEvent>,
}

impl Drop for ActiveWatch {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Owns the lifecycle of the device location watch.
///
/// At most one watch is active at a time: starting a new one cancels the
/// prior watch before any events from the new one are observed, so no stale
/// updates from a superseded watch can be applied (last-write-wins).
pub struct GeolocationWatcher {
    source: Arc<dyn LocationSource>,
    options: WatchOptions,
    active: Option<ActiveWatch>,
}

impl GeolocationWatcher {
    /// Create a watcher over the given source.
    pub fn new(source: Arc<dyn LocationSource>, options: WatchOptions) -> Self {
        Self {
            source,
            options,
            active: None,
        }
    }

    /// Whether the underlying capability is present at all.
    pub fn is_supported(&self) -> bool {
        self.source.is_supported()
    }

    /// Whether a watch is currently active.
    pub fn is_watching(&self) -> bool {
        self.active.is_some()
    }

    /// The options every watch is started with.
    pub fn options(&self) -> WatchOptions {
        self.options
    }

    /// Start a continuous watch, cancelling any prior one first.
    ///
    /// Returns false (and starts nothing) when the capability is absent.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        if !self.source.is_supported() {
            debug!("Watch refused: geolocation capability absent");
            return false;
        }

        // Cancel-before-start: the old watch's receiver is dropped here,
        // so none of its remaining events can ever be observed.
        self.stop();

        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        self.source
            .start_watch(self.options, tx, cancel.clone());
        self.active = Some(ActiveWatch { cancel, events: rx });

        info!(
            high_accuracy = self.options.high_accuracy,
            timeout_ms = self.options.timeout.as_millis() as u64,
            "Location watch started"
        );
        true
    }

    /// Cancel the active watch, if any.
    pub fn stop(&mut self) {
        if let Some(watch) = self.active.take() {
            watch.cancel.cancel();
            debug!("Location watch cancelled");
        }
    }

    /// Pull the next pending event from the active watch, without blocking.
    ///
    /// Returns `None` when there is no active watch or no event is pending.
    /// A disconnected channel (source task ended) leaves the watch marked
    /// inactive.
    pub fn try_next_event(&mut self) -> Option<WatchEvent> {
        let watch = self.active.as_mut()?;
        match watch.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.active = None;
                None
            }
        }
    }
}
