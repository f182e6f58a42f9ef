//! Error handling for Mediagrab

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Mediagrab
#[derive(Debug, Error)]
pub enum MediagrabError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    /// Settings file exists but could not be parsed. Never shown to the user;
    /// the store falls back to an empty configuration.
    #[error("Failed to load settings: {0}")]
    ConfigLoad(String),

    #[error("Failed to save settings to {}: {source}", .path.display())]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed: {0}")]
    Download(String),

    /// A download was triggered with no mode selected. The home panel only
    /// enables the action once a mode is chosen, so this indicates a gating bug.
    #[error("Download triggered without an audio/video mode selected")]
    InvalidMode,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
