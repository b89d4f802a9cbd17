//! MedLocator - Hospital locator core
//!
//! This library provides the core functionality for an interactive hospital
//! locator: a fixed registry of hospitals, search and selection handling,
//! device geolocation watching, straight-line distance estimates, and a
//! renderer-independent map presentation model.
//!
//! # High-Level API
//!
//! For most use cases, the [`controller`] module ties everything together:
//!
//! ```ignore
//! use std::sync::Arc;
//! use medlocator::controller::LocatorController;
//! use medlocator::config::LocatorConfig;
//! use medlocator::location::SimulatedLocationSource;
//! use medlocator::map::ModelMapView;
//! use medlocator::registry::Registry;
//!
//! let source = Arc::new(SimulatedLocationSource::single_fix(0.3135, 32.5811, 25.0));
//! let mut locator = LocatorController::new(
//!     Registry::builtin(),
//!     ModelMapView::new(LocatorConfig::default().initial_viewport()),
//!     source,
//!     LocatorConfig::default(),
//! );
//!
//! locator.handle_search("mulago"); // single match auto-selects
//! locator.request_location();
//! ```
//!
//! The map is abstracted behind [`map::MapView`] and the device location API
//! behind [`location::LocationSource`], so the controller and state logic can
//! be driven and tested without any concrete renderer or real geolocation
//! hardware.

pub mod config;
pub mod controller;
pub mod geo;
pub mod location;
pub mod logging;
pub mod map;
pub mod registry;
pub mod selection;

/// Version of the MedLocator library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
