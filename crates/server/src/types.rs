//! Request and response bodies for the API surface.

use serde::{Deserialize, Serialize};

use catalog::{GenreId, MovieDetails};
use resolver::{Recommendation, Source};

/// Query parameters for `GET /recommendations/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
    /// Catalog genre id to narrow the response to.
    pub genre: Option<GenreId>,
}

/// One recommended movie, merged with live catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedMovie {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub release_date: String,
    pub overview: String,
    pub genre_ids: Vec<GenreId>,
    pub runtime: Option<u32>,
    pub score: f64,
    pub source: Source,
}

impl RecommendedMovie {
    pub fn from_parts(details: MovieDetails, rec: &Recommendation) -> Self {
        Self {
            id: details.id,
            title: details.title.clone(),
            poster_path: details.poster_path.clone(),
            backdrop_path: details.backdrop_path.clone(),
            vote_average: details.vote_average,
            release_date: details.release_date.clone().unwrap_or_default(),
            overview: details.overview.clone().unwrap_or_default(),
            genre_ids: details.genre_ids(),
            runtime: details.runtime,
            score: rec.score,
            source: rec.source,
        }
    }
}

/// Response body for `GET /recommendations/{user_id}`.
///
/// Success carries `total` and `userId`; the two "not ready" states carry
/// only `message`, both with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendedMovie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationsResponse {
    pub fn success(user_id: String, recommendations: Vec<RecommendedMovie>) -> Self {
        Self {
            total: Some(recommendations.len()),
            recommendations,
            user_id: Some(user_id),
            message: None,
        }
    }

    pub fn message(text: &str) -> Self {
        Self {
            recommendations: Vec::new(),
            total: None,
            user_id: None,
            message: Some(text.to_string()),
        }
    }
}
