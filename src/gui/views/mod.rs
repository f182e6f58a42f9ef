//! GUI panels

pub mod home;
pub mod settings;

// Re-export for convenience
pub use home::{DownloadStatus, HomeMessage, HomePanel, HomeState};
pub use settings::{SaveStatus, SettingsMessage, SettingsPanel};

/// Shown wherever an unset folder is displayed. Saving the settings panel
/// untouched persists this literal text.
pub const UNSET_FOLDER_PLACEHOLDER: &str = "None";

pub fn display_folder(folder: Option<&str>) -> &str {
    folder.unwrap_or(UNSET_FOLDER_PLACEHOLDER)
}
