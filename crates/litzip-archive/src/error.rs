//! Error types for archive operations.

use thiserror::Error;

/// Errors that can occur while building, serializing, or loading an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes are not a well-formed zip container, or serialization failed
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Entry content is not valid UTF-8 but was read as text
    #[error("entry '{path}' is not valid UTF-8 text")]
    InvalidText { path: String },
}

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
