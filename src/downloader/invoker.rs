//! Turns a [`DownloadRequest`] into a call against the retrieval library

use crate::downloader::options::DownloadOptions;
use crate::downloader::request::DownloadRequest;
use crate::downloader::traits::MediaRetriever;
use crate::utils::error::MediagrabError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Title reported when the resource carries none
pub const UNKNOWN_TITLE: &str = "Unknown title";

#[derive(Clone)]
pub struct DownloadInvoker {
    retriever: Arc<dyn MediaRetriever>,
    ffmpeg_location: Option<PathBuf>,
}

impl DownloadInvoker {
    pub fn new(retriever: Arc<dyn MediaRetriever>) -> Self {
        Self {
            retriever,
            ffmpeg_location: None,
        }
    }

    /// Directory (or binary) yt-dlp should use for ffmpeg when transcoding
    pub fn with_ffmpeg_location(mut self, location: Option<PathBuf>) -> Self {
        self.ffmpeg_location = location;
        self
    }

    /// Options that would be handed to the retriever for `request`
    pub fn options_for(&self, request: &DownloadRequest) -> DownloadOptions {
        DownloadOptions::for_request(request, self.ffmpeg_location.as_deref())
    }

    /// Download `request` and return the resource's title.
    ///
    /// Every failure, local or from the retriever, comes back as
    /// [`MediagrabError::Download`]. Nothing is retried.
    pub async fn download(&self, request: DownloadRequest) -> Result<String, MediagrabError> {
        info!(
            "Starting {} download of {} into {}",
            request.mode, request.url, request.destination_folder
        );

        let url = request.url.trim();
        if url.is_empty() {
            return Err(MediagrabError::Download("no URL given".to_string()));
        }

        let folder = Path::new(&request.destination_folder);
        if folder.exists() && !folder.is_dir() {
            return Err(MediagrabError::Download(format!(
                "destination {} is not a folder",
                folder.display()
            )));
        }

        let options = self.options_for(&request);
        match self.retriever.retrieve(url, &options).await {
            Ok(media) => {
                let title = media
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
                info!("Downloaded '{}' via {}", title, self.retriever.id());
                Ok(title)
            }
            Err(e) => {
                error!("{} failed for {}: {:#}", self.retriever.id(), url, e);
                Err(MediagrabError::Download(format!("{:#}", e)))
            }
        }
    }
}

impl std::fmt::Debug for DownloadInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadInvoker")
            .field("retriever", &self.retriever.id())
            .field("ffmpeg_location", &self.ffmpeg_location)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::options::PostProcessor;
    use crate::downloader::request::DownloadMode;
    use crate::downloader::traits::MediaInfo;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records what it was asked to fetch and replies with a canned result
    struct FakeRetriever {
        title: Option<String>,
        fail_with: Option<String>,
        calls: Mutex<Vec<(String, DownloadOptions)>>,
    }

    impl FakeRetriever {
        fn titled(title: &str) -> Arc<Self> {
            Arc::new(Self {
                title: Some(title.to_string()),
                fail_with: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                title: None,
                fail_with: Some(msg.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl MediaRetriever for FakeRetriever {
        fn id(&self) -> &'static str {
            "fake"
        }

        async fn retrieve(&self, url: &str, options: &DownloadOptions) -> anyhow::Result<MediaInfo> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), options.clone()));
            match &self.fail_with {
                Some(msg) => Err(anyhow::anyhow!("{}", msg)),
                None => Ok(MediaInfo {
                    title: self.title.clone(),
                    ..Default::default()
                }),
            }
        }
    }

    fn request(mode: DownloadMode) -> DownloadRequest {
        DownloadRequest {
            url: "https://example/video123".to_string(),
            destination_folder: "/music".to_string(),
            mode,
        }
    }

    #[tokio::test]
    async fn test_audio_download_returns_title() {
        let fake = FakeRetriever::titled("Video 123");
        let invoker = DownloadInvoker::new(fake.clone());

        let title = invoker.download(request(DownloadMode::Audio)).await.unwrap();
        assert_eq!(title, "Video 123");

        let calls = fake.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (url, opts) = &calls[0];
        assert_eq!(url, "https://example/video123");
        assert_eq!(opts.format, "bestaudio/best");
        assert!(matches!(
            opts.postprocessors.as_slice(),
            [PostProcessor::ExtractAudio { .. }]
        ));
    }

    #[tokio::test]
    async fn test_video_download_has_no_postprocessing() {
        let fake = FakeRetriever::titled("Clip");
        let invoker = DownloadInvoker::new(fake.clone());

        invoker.download(request(DownloadMode::Video)).await.unwrap();

        let calls = fake.calls.lock().unwrap();
        assert!(calls[0].1.postprocessors.is_empty());
    }

    #[tokio::test]
    async fn test_retriever_failure_becomes_download_error() {
        let invoker = DownloadInvoker::new(FakeRetriever::failing("Unable to connect"));

        let err = invoker
            .download(request(DownloadMode::Video))
            .await
            .unwrap_err();
        match err {
            MediagrabError::Download(msg) => assert!(msg.contains("Unable to connect")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_title_falls_back() {
        let fake = Arc::new(FakeRetriever {
            title: None,
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        });
        let invoker = DownloadInvoker::new(fake);

        let title = invoker.download(request(DownloadMode::Video)).await.unwrap();
        assert_eq!(title, UNKNOWN_TITLE);
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_without_calling_retriever() {
        let fake = FakeRetriever::titled("never");
        let invoker = DownloadInvoker::new(fake.clone());

        let mut req = request(DownloadMode::Audio);
        req.url = "   ".to_string();
        assert!(matches!(
            invoker.download(req).await,
            Err(MediagrabError::Download(_))
        ));
        assert!(fake.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_as_destination_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-folder");
        std::fs::write(&file, "").unwrap();

        let fake = FakeRetriever::titled("never");
        let invoker = DownloadInvoker::new(fake.clone());
        let mut req = request(DownloadMode::Video);
        req.destination_folder = file.to_string_lossy().into_owned();

        assert!(invoker.download(req).await.is_err());
        assert!(fake.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ffmpeg_location_is_forwarded() {
        let fake = FakeRetriever::titled("Song");
        let invoker = DownloadInvoker::new(fake.clone())
            .with_ffmpeg_location(Some(PathBuf::from("/opt/ffmpeg/bin")));

        invoker.download(request(DownloadMode::Audio)).await.unwrap();

        let calls = fake.calls.lock().unwrap();
        assert_eq!(
            calls[0].1.ffmpeg_location.as_deref(),
            Some(Path::new("/opt/ffmpeg/bin"))
        );
    }
}
