//! Error types for entmark.

use thiserror::Error;

/// Result type for entmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for entmark operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Entity extraction failed.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an extraction error.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Error::Extraction(msg.into())
    }
}
