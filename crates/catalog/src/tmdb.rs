//! reqwest-based client for the TMDB v3 REST API.
//!
//! Authentication uses the `api_key` query parameter. Responses are plain
//! JSON and deserialize straight into the types in [`crate::types`].

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::types::{DiscoverResponse, DiscoveredMovie, GenreId, MovieDetails, MovieId};
use crate::Catalog;

/// Default base URL for the TMDB v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Live catalog client.
#[derive(Clone)]
pub struct TmdbClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// Create a client for the given API key.
    ///
    /// `base_url` overrides the production endpoint, which tests use to point
    /// the client at a local stub.
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%path, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%path, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn movie_details(&self, movie_id: MovieId) -> Result<MovieDetails> {
        let path = format!("/movie/{movie_id}");
        match self.get::<MovieDetails>(&path, &[]).await {
            Err(CatalogError::Api { status }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CatalogError::NotFound { movie_id })
            }
            other => other,
        }
    }

    async fn discover_by_genre(&self, genre_id: GenreId, page: u32) -> Result<Vec<DiscoveredMovie>> {
        let response: DiscoverResponse = self
            .get(
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("sort_by", "popularity.desc".to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{DiscoverResponse, MovieDetails};

    #[test]
    fn test_movie_details_deserializes_from_api_payload() {
        let payload = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "backdrop_path": null,
            "overview": "A computer hacker learns the truth.",
            "vote_average": 8.2,
            "release_date": "1999-03-30",
            "runtime": 136,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"}
            ],
            "budget": 63000000,
            "status": "Released"
        }"#;

        let movie: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(movie.id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.genre_names(), vec!["Action", "Science Fiction"]);
        assert_eq!(movie.genre_ids(), vec![28, 878]);
    }

    #[test]
    fn test_movie_details_tolerates_missing_optional_fields() {
        let payload = r#"{"id": 42, "title": "Obscure Short"}"#;

        let movie: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(movie.id, 42);
        assert!(movie.poster_path.is_none());
        assert!(movie.genres.is_empty());
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn test_discover_response_deserializes_results() {
        let payload = r#"{
            "page": 1,
            "results": [
                {
                    "id": 550,
                    "title": "Fight Club",
                    "genre_ids": [18, 53],
                    "popularity": 61.4,
                    "vote_average": 8.4,
                    "release_date": "1999-10-15"
                }
            ],
            "total_pages": 500,
            "total_results": 10000
        }"#;

        let response: DiscoverResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, 550);
        assert_eq!(response.results[0].genre_ids, vec![18, 53]);
    }
}
