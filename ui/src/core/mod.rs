//! Platform-agnostic helpers shared by the dashboard views.

pub mod config;
pub mod format;
pub mod loader;
