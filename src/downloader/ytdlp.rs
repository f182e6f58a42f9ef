//! yt-dlp wrapper
//!
//! Runs the yt-dlp executable with the arguments built from
//! [`DownloadOptions`] and parses the metadata it prints on stdout.

use crate::downloader::options::DownloadOptions;
use crate::downloader::traits::{MediaInfo, MediaRetriever};
use crate::utils::error::MediagrabError;
use crate::utils::platform;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info};

/// Media retriever backed by the yt-dlp executable
#[derive(Debug, Clone)]
pub struct YtDlpRetriever {
    ytdlp_path: PathBuf,
}

impl YtDlpRetriever {
    /// Locate yt-dlp (bundled, PATH, common install paths)
    pub fn new() -> Result<Self, MediagrabError> {
        match platform::find_ytdlp() {
            Some(path) => Ok(Self::with_path(path)),
            None => {
                error!("yt-dlp not found anywhere!");
                Err(MediagrabError::YtDlpNotFound)
            }
        }
    }

    pub fn with_path(ytdlp_path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: ytdlp_path.into(),
        }
    }

    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl MediaRetriever for YtDlpRetriever {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn retrieve(&self, url: &str, options: &DownloadOptions) -> Result<MediaInfo> {
        let args = options.to_args(url);
        debug!("Running {} with {:?}", self.ytdlp_path.display(), args);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.ytdlp_path.display()))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!(target: "yt-dlp", "{}", line);
        }

        if !output.status.success() {
            error!("yt-dlp exited with {}", output.status);
            let cause = stderr
                .lines()
                .rev()
                .find(|l| l.starts_with("ERROR"))
                .unwrap_or_else(|| stderr.trim());
            anyhow::bail!("yt-dlp exited with {}: {}", output.status, cause);
        }

        let info = parse_media_info(&output.stdout)?;
        info!(
            "yt-dlp finished {:?} ({})",
            info.title.as_deref().unwrap_or("?"),
            info.ext.as_deref().unwrap_or("?")
        );
        Ok(info)
    }
}

/// Parse the JSON yt-dlp dumps for a single resource. Only the first
/// non-empty line is used.
fn parse_media_info(stdout: &[u8]) -> Result<MediaInfo> {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .context("yt-dlp printed no metadata")?;

    serde_json::from_str(line).context("failed to parse yt-dlp metadata")
}
