//! Utility modules for error handling, configuration and platform paths

pub mod config;
pub mod error;
pub mod platform;

// Re-export for convenience
pub use config::{Configuration, SettingsStore};
pub use error::MediagrabError;
