//! # Resolver Crate
//!
//! Serving-time core of the recommendation pipeline. Given a user, the
//! resolver turns the offline trainer's raw score candidates into a final
//! recommendation list:
//!
//! 1. Load the user's raw candidates from the score store
//! 2. Build a taste profile: watched set + genres of watched movies
//! 3. Annotate unwatched candidates with their catalog genres (fan-out,
//!    joined before any filtering)
//! 4. Primary filter: drop watched items and items with no genre overlap
//! 5. Fallback: when the primary filter empties the list and the user has
//!    known genres, discover popular movies per watched genre
//! 6. Truncate to the requested length
//!
//! The resolver owns no state: it is a pure function of the score store,
//! the watchlist, and the catalog, all injected at construction.
//!
//! ## Components
//!
//! - **types**: Candidates and resolved recommendations
//! - **profile**: Taste profile building ([`TasteProfile`])
//! - **traits** / **filter_chain** / **filters**: Composable candidate filters
//! - **recommender**: The orchestration itself
//! - **error**: Error types for resolution

pub mod error;
pub mod filter_chain;
pub mod filters;
pub mod profile;
pub mod recommender;
pub mod traits;
pub mod types;

pub use error::{RecommendError, Result};
pub use filter_chain::FilterChain;
pub use profile::{build_taste_profile, TasteProfile};
pub use recommender::Recommender;
pub use traits::Filter;
pub use types::{Candidate, Recommendation, Source};
