//! Option bag handed to the retrieval library
//!
//! Mirrors the handful of yt-dlp settings this app cares about and knows how
//! to render them as command-line arguments.

use crate::downloader::request::{DownloadMode, DownloadRequest};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output file name, filled in by yt-dlp from the resource's metadata
pub const OUTPUT_FILENAME_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Best audio-only stream, falling back to the best combined one
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// Best video plus best audio, or the best single file carrying both
pub const VIDEO_FORMAT: &str = "bestvideo*+bestaudio/best";

pub const AUDIO_CODEC: &str = "mp3";

/// Target bitrate in kbps
pub const AUDIO_QUALITY: &str = "192";

/// Steps yt-dlp runs after the download finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessor {
    /// Transcode to an audio-only file (yt-dlp's `FFmpegExtractAudio`)
    ExtractAudio { codec: String, quality: String },
}

impl PostProcessor {
    fn push_args(&self, args: &mut Vec<OsString>) {
        match self {
            PostProcessor::ExtractAudio { codec, quality } => {
                args.push("--extract-audio".into());
                args.push("--audio-format".into());
                args.push(codec.into());
                args.push("--audio-quality".into());
                args.push(format!("{}K", quality).into());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub output_template: PathBuf,
    pub format: String,
    pub quiet: bool,
    pub postprocessors: Vec<PostProcessor>,
    pub ffmpeg_location: Option<PathBuf>,
}

impl DownloadOptions {
    pub fn for_request(request: &DownloadRequest, ffmpeg_location: Option<&Path>) -> Self {
        let output_template = Path::new(&request.destination_folder).join(OUTPUT_FILENAME_TEMPLATE);

        let (format, postprocessors) = match request.mode {
            DownloadMode::Audio => (
                AUDIO_FORMAT,
                vec![PostProcessor::ExtractAudio {
                    codec: AUDIO_CODEC.to_string(),
                    quality: AUDIO_QUALITY.to_string(),
                }],
            ),
            DownloadMode::Video => (VIDEO_FORMAT, Vec::new()),
        };

        Self {
            output_template,
            format: format.to_string(),
            quiet: false,
            postprocessors,
            ffmpeg_location: ffmpeg_location.map(Path::to_path_buf),
        }
    }

    /// yt-dlp arguments for these options, ending with `url`.
    ///
    /// The resource's metadata is dumped as JSON on stdout while the download
    /// still happens.
    pub fn to_args(&self, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-o".into(),
            self.output_template.clone().into_os_string(),
            "-f".into(),
            self.format.clone().into(),
            "--no-simulate".into(),
            "--dump-json".into(),
            "--no-playlist".into(),
        ];

        // --dump-json implies quiet; --progress keeps the progress output on stderr
        if !self.quiet {
            args.push("--progress".into());
            args.push("--newline".into());
        }

        for pp in &self.postprocessors {
            pp.push_args(&mut args);
        }

        if let Some(ffmpeg) = &self.ffmpeg_location {
            args.push("--ffmpeg-location".into());
            args.push(ffmpeg.clone().into_os_string());
        }

        args.push("--".into());
        args.push(url.into());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: DownloadMode) -> DownloadRequest {
        DownloadRequest {
            url: "https://example/video123".to_string(),
            destination_folder: "/music".to_string(),
            mode,
        }
    }

    fn args_as_strings(opts: &DownloadOptions, url: &str) -> Vec<String> {
        opts.to_args(url)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_audio_selects_audio_and_transcodes() {
        let opts = DownloadOptions::for_request(&request(DownloadMode::Audio), None);

        assert_eq!(opts.format, "bestaudio/best");
        assert_eq!(
            opts.postprocessors,
            vec![PostProcessor::ExtractAudio {
                codec: "mp3".to_string(),
                quality: "192".to_string(),
            }]
        );
        assert!(!opts.quiet);
    }

    #[test]
    fn test_video_has_no_postprocessors() {
        let opts = DownloadOptions::for_request(&request(DownloadMode::Video), None);

        assert_eq!(opts.format, VIDEO_FORMAT);
        assert!(opts.postprocessors.is_empty());
    }

    #[test]
    fn test_output_template_joins_folder_and_title() {
        let opts = DownloadOptions::for_request(&request(DownloadMode::Video), None);
        assert_eq!(
            opts.output_template,
            Path::new("/music").join("%(title)s.%(ext)s")
        );
    }

    #[test]
    fn test_audio_args() {
        let opts = DownloadOptions::for_request(
            &request(DownloadMode::Audio),
            Some(Path::new("/opt/ffmpeg/bin")),
        );
        let args = args_as_strings(&opts, "https://example/video123");

        let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
        assert_eq!(args[pos("-f") + 1], "bestaudio/best");
        assert!(args.contains(&"--extract-audio".to_string()));
        assert_eq!(args[pos("--audio-format") + 1], "mp3");
        assert_eq!(args[pos("--audio-quality") + 1], "192K");
        assert_eq!(args[pos("--ffmpeg-location") + 1], "/opt/ffmpeg/bin");
        assert!(args.contains(&"--progress".to_string()));

        // URL always comes last, after the separator
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args.last().unwrap(), "https://example/video123");
    }

    #[test]
    fn test_video_args_skip_transcoding() {
        let opts = DownloadOptions::for_request(&request(DownloadMode::Video), None);
        let args = args_as_strings(&opts, "https://example/video123");

        assert!(!args.contains(&"--extract-audio".to_string()));
        assert!(!args.contains(&"--ffmpeg-location".to_string()));
        assert!(args.contains(&"--no-simulate".to_string()));
    }

    #[test]
    fn test_quiet_drops_progress() {
        let mut opts = DownloadOptions::for_request(&request(DownloadMode::Video), None);
        opts.quiet = true;
        let args = args_as_strings(&opts, "https://example/video123");
        assert!(!args.contains(&"--progress".to_string()));
    }
}
