//! Terminal UI for MedLocator.
//!
//! A dashboard with a search bar, the filtered hospital list, a details
//! panel, a textual map panel, and a status line.

pub mod app;
pub mod render;
pub mod widgets;

pub use app::LocatorApp;
