//! Error types for bundle operations.

use crate::client::ClientError;
use thiserror::Error;

/// Errors that can occur during bundle operations.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Archive construction or parsing error
    #[error("archive error: {0}")]
    Archive(#[from] litzip_archive::ArchiveError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ciphertext is not valid base64
    #[error("ciphertext is not valid base64: {0}")]
    Ciphertext(#[from] base64::DecodeError),

    /// Missing required entry in bundle
    #[error("bundle is missing expected entry: {0}")]
    MissingEntry(String),

    /// Metadata names zero or several condition sets
    #[error("metadata must carry exactly one condition set, found {found}")]
    ConditionCount { found: usize },

    /// Nothing to bundle
    #[error("no files to bundle")]
    NoFiles,

    /// File name cannot become an archive entry
    #[error("file name '{0}' is empty or names a folder")]
    InvalidFileName(String),

    /// Encryption service failure, surfaced unchanged
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
