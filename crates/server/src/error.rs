//! API-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use resolver::RecommendError;

/// Errors a handler can surface as an HTTP error status.
///
/// The two "not ready" conditions (no watchlist, no scores yet) are NOT
/// errors — handlers answer those with 200 + message bodies directly.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::Store(inner) => ApiError::Store(inner),
            RecommendError::Catalog(inner) => ApiError::Catalog(inner),
            // NoScoresAvailable is handled before conversion; reaching here
            // is a handler bug, surfaced as a plain 500.
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Catalog(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::error!(error = %self, status = status.as_u16(), "request failed");

        let body = Json(json!({ "error": "Failed to fetch recommendations" }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
