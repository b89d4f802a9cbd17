//! Simulated location source - scripted fixes and errors.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::WatchError;
use super::source::LocationSource;
use super::state::{UserFix, WatchEvent, WatchOptions};

/// A location source that plays back a fixed script of events.
///
/// Used by tests and by the CLI demo mode, where there is no real device
/// geolocation API to wrap. After the script is exhausted the source keeps
/// re-delivering the last fix at the configured interval (a continuous watch,
/// matching real device behavior), until cancelled.
///
/// An empty script models a device that never produces a fix: the watch
/// fails with [`WatchError::Timeout`] after the configured watch timeout.
#[derive(Debug, Clone)]
pub struct SimulatedLocationSource {
    script: Vec<WatchEvent>,
    interval: Duration,
    repeat_last_fix: bool,
}

impl SimulatedLocationSource {
    /// Default delay between scripted events.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

    /// Create a source from an explicit event script.
    pub fn new(script: Vec<WatchEvent>) -> Self {
        Self {
            script,
            interval: Self::DEFAULT_INTERVAL,
            repeat_last_fix: true,
        }
    }

    /// A source that repeatedly delivers one fix.
    pub fn single_fix(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self::new(vec![WatchEvent::Fix(UserFix::new(
            latitude, longitude, accuracy_m,
        ))])
    }

    /// A source that delivers the given fixes in order.
    pub fn from_fixes(fixes: impl IntoIterator<Item = (f64, f64, f64)>) -> Self {
        Self::new(
            fixes
                .into_iter()
                .map(|(lat, lon, acc)| WatchEvent::Fix(UserFix::new(lat, lon, acc)))
                .collect(),
        )
    }

    /// A source that fails every watch with the given error.
    pub fn failing(error: WatchError) -> Self {
        Self {
            script: vec![WatchEvent::Error(error)],
            interval: Self::DEFAULT_INTERVAL,
            repeat_last_fix: false,
        }
    }

    /// Set the delay between scripted events.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Stop after the script instead of re-delivering the last fix.
    pub fn without_repeat(mut self) -> Self {
        self.repeat_last_fix = false;
        self
    }
}

impl LocationSource for SimulatedLocationSource {
    fn is_supported(&self) -> bool {
        true
    }

    fn start_watch(
        &self,
        options: WatchOptions,
        events: mpsc::Sender<WatchEvent>,
        cancel: CancellationToken,
    ) {
        let script = self.script.clone();
        let interval = self.interval;
        let repeat_last_fix = self.repeat_last_fix;

        tokio::spawn(async move {
            if script.is_empty() {
                // No fix will ever arrive: honor the watch timeout.
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    _ = tokio::time::sleep(options.timeout) => {
                        let _ = events.send(WatchEvent::Error(WatchError::Timeout)).await;
                    }
                }
                return;
            }

            let mut last_fix: Option<UserFix> = None;
            for step in script {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(interval) => {}
                }
                if let WatchEvent::Fix(fix) = &step {
                    last_fix = Some(fix.clone());
                }
                if events.send(step).await.is_err() {
                    return;
                }
            }

            let Some(fix) = last_fix.filter(|_| repeat_last_fix) else {
                debug!("Simulated watch script exhausted");
                return;
            };

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(interval) => {}
                }
                // Re-delivered fixes get a fresh timestamp, as a real
                // continuous watch would report.
                let again = UserFix::new(fix.latitude, fix.longitude, fix.accuracy_m);
                if events.send(WatchEvent::Fix(again)).await.is_err() {
                    return;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_fix_delivered_and_repeated() {
        let source = SimulatedLocationSource::single_fix(0.3135, 32.5811, 25.0)
            .with_interval(Duration::from_millis(1));
        let (tx, mut rx) = mpsc::channel(8);

        source.start_watch(WatchOptions::default(), tx, CancellationToken::new());

        for _ in 0..3 {
            match rx.recv().await {
                Some(WatchEvent::Fix(fix)) => {
                    assert_eq!(fix.coords(), (0.3135, 32.5811));
                    assert_eq!(fix.accuracy_m, 25.0);
                }
                other => panic!("expected a fix, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_failing_source_delivers_error_once() {
        let source = SimulatedLocationSource::failing(WatchError::PermissionDenied)
            .with_interval(Duration::from_millis(1));
        let (tx, mut rx) = mpsc::channel(8);

        source.start_watch(WatchOptions::default(), tx, CancellationToken::new());

        match rx.recv().await {
            Some(WatchEvent::Error(WatchError::PermissionDenied)) => {}
            other => panic!("expected permission denied, got {other:?}"),
        }
        // Script exhausted with no fix to repeat: channel closes.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_script_times_out() {
        let source = SimulatedLocationSource::new(vec![]);
        let (tx, mut rx) = mpsc::channel(8);
        let options = WatchOptions {
            timeout: Duration::from_millis(5),
            ..Default::default()
        };

        source.start_watch(options, tx, CancellationToken::new());

        match rx.recv().await {
            Some(WatchEvent::Error(WatchError::Timeout)) => {}
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancellation_stops_delivery() {
        let source = SimulatedLocationSource::single_fix(0.3135, 32.5811, 25.0)
            .with_interval(Duration::from_millis(1));
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();

        source.start_watch(WatchOptions::default(), tx, cancel.clone());

        assert!(rx.recv().await.is_some());
        cancel.cancel();

        // Drain anything already in flight, then the channel must close.
        while let Some(_event) = rx.recv().await {}
    }
}
