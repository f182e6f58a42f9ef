//! Platform-specific paths for Mediagrab
//!
//! Settings live beside the executable so a portable install carries its own
//! configuration. yt-dlp is looked up the same way before falling back to the
//! system PATH and the usual install locations.

use crate::utils::config::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory holding the running executable
pub fn exe_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Returns the configuration directory used when the executable directory is unknown
/// - macOS: ~/Library/Application Support/mediagrab
/// - Windows: %APPDATA%\mediagrab
/// - Linux: ~/.config/mediagrab
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mediagrab")
}

/// Fixed location of the settings file
pub fn settings_path() -> PathBuf {
    exe_dir().unwrap_or_else(config_dir).join(CONFIG_FILE_NAME)
}

/// Platform-specific executable name for yt-dlp
pub fn ytdlp_binary_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "yt-dlp.exe"
    } else {
        "yt-dlp"
    }
}

/// Find yt-dlp with priority:
/// 1. Next to the executable
/// 2. System PATH
/// 3. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(adjacent) = exe_dir()
        .map(|dir| dir.join(ytdlp_binary_name()))
        .filter(|p| is_executable(p))
    {
        info!("Using bundled yt-dlp: {:?}", adjacent);
        return Some(adjacent);
    }

    if let Ok(system) = which::which("yt-dlp") {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere");
    None
}

fn find_in_common_paths() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        "/usr/bin/yt-dlp",
        "/Library/Frameworks/Python.framework/Versions/Current/bin/yt-dlp",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    // pip --user
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local").join("bin").join("yt-dlp"));
    }

    candidates.into_iter().find(|p| {
        debug!("Checking {:?}", p);
        is_executable(p)
    })
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
