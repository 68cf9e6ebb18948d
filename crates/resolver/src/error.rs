//! Error types for recommendation resolution.

use thiserror::Error;

/// Errors that can occur while resolving recommendations.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The trainer has not produced a score artifact for this user yet.
    /// Expected and recoverable; callers surface it as an informational
    /// message, not a server error.
    #[error("no recommendation scores available for user {user_id}")]
    NoScoresAvailable { user_id: String },

    /// Watchlist or score store failure; propagated, not retried.
    #[error(transparent)]
    Store(#[from] store::StoreError),

    /// Catalog infrastructure failure; propagated, not retried. A single
    /// failed per-movie lookup inside a fan-out does NOT surface here — it
    /// degrades to "no genres" instead.
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),

    /// A fan-out lookup task panicked or was cancelled.
    #[error("lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, RecommendError>;
