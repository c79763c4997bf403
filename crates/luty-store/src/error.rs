//! Persistence error types for luty-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving a flat-file store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file does not exist. Callers usually treat this as an empty store.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but its content is not a valid record tree.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The record tree could not be serialized.
    #[error("Failed to encode: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading or writing the file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether this is the recoverable missing-file case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
