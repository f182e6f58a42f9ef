//! Download requests and their execution through yt-dlp

pub mod invoker;
pub mod options;
pub mod request;
pub mod traits;
pub mod ytdlp;

pub use invoker::DownloadInvoker;
pub use options::{DownloadOptions, PostProcessor};
pub use request::{DownloadMode, DownloadRequest};
pub use traits::{MediaInfo, MediaRetriever};
pub use ytdlp::YtDlpRetriever;
