//! Download request types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stream to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DownloadMode {
    Audio,
    Video,
}

impl DownloadMode {
    pub const ALL: [DownloadMode; 2] = [DownloadMode::Video, DownloadMode::Audio];

    /// Label used on the home panel's radio buttons
    pub fn label(&self) -> &'static str {
        match self {
            DownloadMode::Audio => "Download Audio",
            DownloadMode::Video => "Download Video",
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Audio => write!(f, "audio"),
            DownloadMode::Video => write!(f, "video"),
        }
    }
}

/// A single download to perform. Built when the user triggers a download and
/// dropped once the invoker returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub destination_folder: String,
    pub mode: DownloadMode,
}

impl DownloadRequest {
    /// Returns `None` when the folder is empty or no mode is chosen.
    pub fn new(
        url: impl Into<String>,
        destination_folder: impl Into<String>,
        mode: Option<DownloadMode>,
    ) -> Option<Self> {
        let destination_folder = destination_folder.into();
        if destination_folder.is_empty() {
            return None;
        }

        Some(Self {
            url: url.into(),
            destination_folder,
            mode: mode?,
        })
    }
}
