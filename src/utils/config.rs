//! Application configuration and its on-disk store

use crate::utils::error::MediagrabError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the persisted settings
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Folder downloads go to when the user hasn't picked one. `None` until
    /// the first save.
    #[serde(default)]
    pub default_download_folder: Option<String>,
}

impl Configuration {
    pub fn with_folder(folder: impl Into<String>) -> Self {
        Self {
            default_download_folder: Some(folder.into()),
        }
    }
}

/// Loads and saves [`Configuration`] as a flat JSON object at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the well-known location beside the executable.
    pub fn at_default_location() -> Self {
        Self::new(crate::utils::platform::settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file.
    ///
    /// A missing file is the normal first-run state and an unparsable one is
    /// treated the same way, so this never fails.
    pub fn load(&self) -> Configuration {
        match self.try_load() {
            Ok(Some(config)) => {
                debug!("Loaded settings from {:?}", self.path);
                config
            }
            Ok(None) => {
                info!("No settings file at {:?}, using defaults", self.path);
                Configuration::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Configuration::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Configuration>, MediagrabError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(MediagrabError::ConfigLoad(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| MediagrabError::ConfigLoad(format!("{}: {}", self.path.display(), e)))
    }

    /// Overwrite the settings file with `config`.
    ///
    /// Writes a sibling temp file first and renames it into place so an
    /// interrupted write leaves the previous settings intact.
    pub fn save(&self, config: &Configuration) -> Result<(), MediagrabError> {
        let json = serde_json::to_string_pretty(config)?;
        let save_err = |source| MediagrabError::ConfigSave {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(save_err)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(save_err)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(save_err(e));
        }

        info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
