//! # Server Crate
//!
//! HTTP surface of the recommendation pipeline.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `GET /recommendations/{user_id}?limit=N&genre=G`
//!
//! Absence of recommendations is never an error status: an empty watchlist
//! or a not-yet-trained user gets HTTP 200 with an informational message,
//! so the UI can show a call-to-action instead of an error state.

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
pub use types::{RecommendationsResponse, RecommendedMovie};
