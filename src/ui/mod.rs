//! Terminal rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`common`]: Header bar, tab bar, status bar, and help overlay
//! - [`dashboard`]: KPI cards, intelligence counters, charts, detections table
//! - [`console`]: Test console input line and output area
//! - [`theme`]: Light/dark theme with automatic terminal detection

pub mod common;
pub mod console;
pub mod dashboard;
pub mod theme;

pub use theme::Theme;
