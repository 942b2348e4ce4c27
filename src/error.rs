use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlexError {
    // Config
    #[error("failed to compile the pattern '{pattern}' - {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),

    // Runtime
    #[error("failed to open directory {} - {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results")]
    Output(#[source] std::io::Error),
}

impl CrawlexError {
    /// Process exit code for this error: `1` for configuration errors
    /// caught before the crawl starts, `2` for unrecoverable system
    /// failures. Per-directory I/O errors during the crawl never reach
    /// this mapping — workers log and skip them.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPattern { .. } | Self::InvalidThreadCount(_) => 1,
            Self::Io { .. } | Self::Output(_) => 2,
        }
    }
}
