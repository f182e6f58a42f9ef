use crate::downloader::options::DownloadOptions;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Metadata the retrieval library reports for a fetched resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub webpage_url: Option<String>,
}

/// Seam between the app and whatever actually fetches media.
///
/// Network I/O, retries, stream negotiation and transcoding all live behind
/// this trait; the app only supplies options.
#[async_trait]
pub trait MediaRetriever: Send + Sync {
    /// Short identifier used in logs (e.g. "yt-dlp")
    fn id(&self) -> &'static str;

    /// Fetch `url` according to `options` and return its metadata
    async fn retrieve(&self, url: &str, options: &DownloadOptions) -> Result<MediaInfo>;
}
