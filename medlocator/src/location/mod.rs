//! Device geolocation - fixes, watch lifecycle, and injectable sources.
//!
//! # Architecture
//!
//! The device location API is modeled as an injectable capability rather than
//! an ambient global:
//!
//! - [`LocationSource`] - the capability trait; a source delivers a continuous
//!   stream of [`WatchEvent`]s (fixes and classified errors) until cancelled
//! - [`GeolocationWatcher`] - owns at most one active watch; starting a new
//!   watch cancels the prior one (last-write-wins, no queued stale updates)
//! - [`SimulatedLocationSource`] - scripted fixes/errors for tests and demos
//! - [`UnsupportedLocationSource`] - the capability is absent; detected once
//!   at startup so the UI can disable the locate control for the session
//!
//! # Error Boundary
//!
//! Failures never propagate past this module as panics: every failure mode
//! is classified into a [`WatchError`] variant and delivered through the
//! same channel as fixes.
//!
//! # Usage
//!
//! ```ignore
//! let source = Arc::new(SimulatedLocationSource::single_fix(0.3135, 32.5811, 25.0));
//! let mut watcher = GeolocationWatcher::new(source, WatchOptions::default());
//!
//! watcher.start();
//! while let Some(event) = watcher.try_next_event() {
//!     match event {
//!         WatchEvent::Fix(fix) => println!("fix at {}, {}", fix.latitude, fix.longitude),
//!         WatchEvent::Error(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

mod error;
mod simulated;
mod source;
mod state;
mod watcher;

pub use error::WatchError;
pub use simulated::SimulatedLocationSource;
pub use source::{LocationSource, UnsupportedLocationSource};
pub use state::{UserFix, WatchEvent, WatchOptions};
pub use watcher::GeolocationWatcher;
