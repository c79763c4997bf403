//! Error types for the core model.
//!
//! Persistence and rendering failures are defined in their own crates. A
//! unified error is deferred to `luty-cli` where all crate errors converge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation, such as a malformed sector center.
    #[error("Validation error: {0}")]
    Validation(String),
}
