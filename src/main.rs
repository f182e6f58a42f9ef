//! Mediagrab - paste a media URL, pick a folder, download audio or video.
//!
//! The actual fetching and transcoding is done by yt-dlp; this binary wires a
//! small iced GUI (or a headless one-shot download) around it.

use anyhow::{Context, Result};
use clap::Parser;
use mediagrab::downloader::{DownloadInvoker, DownloadMode, DownloadRequest, YtDlpRetriever};
use mediagrab::gui::{self, AppFlags};
use mediagrab::utils::SettingsStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Settings file to use instead of config.json beside the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// ffmpeg binary or directory used for audio transcoding
    #[arg(long)]
    ffmpeg_location: Option<PathBuf>,

    /// Download this URL without opening the window
    #[arg(long)]
    download: Option<String>,

    /// Destination folder for --download (defaults to the saved default folder)
    #[arg(long, requires = "download")]
    folder: Option<String>,

    /// Extract audio instead of downloading video (with --download)
    #[arg(long, requires = "download")]
    audio: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let store = args
        .config
        .map(SettingsStore::new)
        .unwrap_or_else(SettingsStore::at_default_location);
    info!("Settings file: {:?}", store.path());

    // yt-dlp missing is not fatal for the GUI; downloads will report it
    let ytdlp_path = match YtDlpRetriever::new() {
        Ok(retriever) => retriever.ytdlp_path().to_path_buf(),
        Err(e) => {
            warn!("{}", e);
            eprintln!("WARNING: yt-dlp not found. Downloads will fail until it is installed:");
            eprintln!("  pip install yt-dlp");
            eprintln!("  or visit: https://github.com/yt-dlp/yt-dlp");
            PathBuf::from(mediagrab::utils::platform::ytdlp_binary_name())
        }
    };
    let invoker = DownloadInvoker::new(Arc::new(YtDlpRetriever::with_path(ytdlp_path)))
        .with_ffmpeg_location(args.ffmpeg_location);

    if let Some(url) = args.download {
        let mode = if args.audio {
            DownloadMode::Audio
        } else {
            DownloadMode::Video
        };
        return download_cli(&store, invoker, url, args.folder, mode);
    }

    gui::app::run(AppFlags { store, invoker })?;

    Ok(())
}

/// One-shot download through the same invoker the GUI uses
fn download_cli(
    store: &SettingsStore,
    invoker: DownloadInvoker,
    url: String,
    folder: Option<String>,
    mode: DownloadMode,
) -> Result<()> {
    let folder = folder
        .or_else(|| store.load().default_download_folder)
        .context("no --folder given and no default download folder saved")?;
    let request = DownloadRequest::new(url, folder, Some(mode))
        .context("destination folder must not be empty")?;

    let rt = tokio::runtime::Runtime::new()?;
    let title = rt.block_on(invoker.download(request))?;
    println!("Downloaded: {}", title);

    Ok(())
}
