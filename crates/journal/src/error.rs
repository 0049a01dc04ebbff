//! Error types for the journal crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a journal
#[derive(Error, Debug)]
pub enum JournalError {
    /// Creating or writing the output file failed
    #[error("Failed to write journal to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, JournalError>;
