//! Storage error types.

use std::io;
use std::path::PathBuf;

/// Result alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while saving or loading habit data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// File could not be opened, read, or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// Document is not valid JSON or does not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation while rebuilding the tracker.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        StorageError::InvalidRecord(reason.into())
    }
}
