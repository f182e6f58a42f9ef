//! Mediagrab library

pub mod downloader;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use downloader::{DownloadInvoker, DownloadMode, DownloadRequest, YtDlpRetriever};
pub use gui::{AppFlags, MediagrabApp, Message, View};
pub use utils::{Configuration, MediagrabError, SettingsStore};
