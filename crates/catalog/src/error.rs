//! Error types for catalog lookups.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while talking to the movie catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog has no movie with this id.
    #[error("movie {movie_id} not found in catalog")]
    NotFound { movie_id: MovieId },

    /// The catalog API answered with a non-success status.
    #[error("catalog API returned status {status}")]
    Api { status: u16 },

    /// Transport-level failure (DNS, connect, timeout, malformed body).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
