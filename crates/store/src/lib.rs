//! # Store Crate
//!
//! Data access for the two stores the recommendation pipeline reads from:
//!
//! - **watchlist**: user–movie interactions ("user added movie to a
//!   watchlist"), backed by Postgres in production
//! - **scores**: per-user recommendation candidates produced by the offline
//!   matrix-factorization trainer, one JSON file per user
//!
//! ## Components
//!
//! - **types**: Interaction rows and trainer score records
//! - **watchlist**: [`WatchlistStore`] trait + Postgres implementation
//! - **scores**: [`ScoreStore`] trait + filesystem implementation
//! - **memory**: In-memory backends for tests
//! - **error**: Error types for store access
//!
//! Everything here is read-only from the pipeline's point of view; watchlist
//! writes belong to the web application and score writes belong to the
//! trainer.

pub mod error;
pub mod memory;
pub mod scores;
pub mod types;
pub mod watchlist;

pub use error::{Result, StoreError};
pub use memory::{MemoryScoreStore, MemoryWatchlistStore};
pub use scores::{FsScoreStore, ScoreStore};
pub use types::{Interaction, ScoredItem};
pub use watchlist::{PgWatchlistStore, WatchlistStore};
