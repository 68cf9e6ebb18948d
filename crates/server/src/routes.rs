//! Router and handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use catalog::Catalog;
use resolver::{Recommendation, RecommendError};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{RecommendationParams, RecommendationsResponse, RecommendedMovie};

const DEFAULT_LIMIT: usize = 20;

const NO_WATCHLIST_MESSAGE: &str = "No watchlists found. Add movies to your watchlist first!";
const SCORES_PENDING_MESSAGE: &str =
    "Recommendations not generated yet. Please run the training script.";

/// Creates the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/recommendations/:user_id", get(recommendations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /recommendations/{user_id}?limit=N&genre=G`
async fn recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    // Watchlist-first precondition: without any history there is nothing to
    // personalize, whatever the score store holds.
    if !state.watchlist.has_watchlist(&user_id).await? {
        return Ok(Json(RecommendationsResponse::message(NO_WATCHLIST_MESSAGE)));
    }

    let recs = match state.recommender.recommend(&user_id, limit).await {
        Ok(recs) => recs,
        Err(RecommendError::NoScoresAvailable { .. }) => {
            info!(user_id, "score artifact not generated yet");
            return Ok(Json(RecommendationsResponse::message(
                SCORES_PENDING_MESSAGE,
            )));
        }
        Err(err) => return Err(err.into()),
    };

    let mut movies = enrich_with_catalog(state.catalog.clone(), recs).await;

    if let Some(genre_id) = params.genre {
        movies.retain(|movie| movie.genre_ids.contains(&genre_id));
    }

    Ok(Json(RecommendationsResponse::success(user_id, movies)))
}

/// Merge resolved recommendations with live catalog metadata.
///
/// Lookups fan out concurrently and the original recommendation order is
/// restored afterwards. A movie whose lookup fails is dropped from the
/// response rather than failing the whole request.
async fn enrich_with_catalog(
    catalog: Arc<dyn Catalog>,
    recs: Vec<Recommendation>,
) -> Vec<RecommendedMovie> {
    let mut lookups = JoinSet::new();
    for (position, rec) in recs.into_iter().enumerate() {
        let catalog = catalog.clone();
        lookups.spawn(async move {
            let Ok(movie_id) = rec.item_id.parse::<i64>() else {
                warn!(item_id = %rec.item_id, "recommendation id is not a catalog id, dropping");
                return None;
            };
            match catalog.movie_details(movie_id).await {
                Ok(details) => Some((position, RecommendedMovie::from_parts(details, &rec))),
                Err(err) => {
                    warn!(movie_id, error = %err, "metadata lookup failed, dropping recommendation");
                    None
                }
            }
        });
    }

    let mut positioned = Vec::new();
    while let Some(joined) = lookups.join_next().await {
        if let Ok(Some(entry)) = joined {
            positioned.push(entry);
        }
    }
    positioned.sort_by_key(|(position, _)| *position);
    positioned.into_iter().map(|(_, movie)| movie).collect()
}
