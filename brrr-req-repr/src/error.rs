//! Error types for the program tree crate

use thiserror::Error;

/// Result type alias for repr operations
pub type ReprResult<T> = Result<T, ReprError>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum ReprError {
    /// The external parser handed over a tree that does not decode
    #[error("Invalid program tree: {0}")]
    Json(#[from] serde_json::Error),
}
