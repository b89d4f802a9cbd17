//! Map presentation - markers, viewport, and the renderer seam.
//!
//! # Architecture
//!
//! The core never talks to a concrete mapping library. Map operations are a
//! small trait, [`MapView`], with two implementations here:
//!
//! - [`ModelMapView`] - an in-memory model of what a map surface would show
//!   (viewport + marker set). Renderers draw from it; tests assert against it.
//! - [`NullMapView`] - discards everything, for headless use.
//!
//! Any interactive map library exposing tile layers, markers with popups,
//! polylines, and circles can substitute by implementing [`MapView`] over
//! its own surface.
//!
//! # Marker Lifecycle
//!
//! Marker state is rebuilt, never incrementally patched: each operation
//! removes the prior marker of its kind before placing the new one, and
//! re-selection discards prior state unconditionally.

mod markers;
mod model;
mod null;
mod view;

pub use markers::{HospitalMarker, RouteLine, UserMarker};
pub use model::ModelMapView;
pub use null::NullMapView;
pub use view::{MapView, Viewport};
