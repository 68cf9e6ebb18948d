//! Error types for store access.

use thiserror::Error;

/// Errors that can occur while reading the watchlist or score stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing database could not be reached or rejected the query.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// I/O error while reading a score artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A score artifact exists but does not parse as the expected JSON.
    #[error("malformed score data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, StoreError>;
