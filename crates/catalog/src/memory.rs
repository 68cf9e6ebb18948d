//! In-memory catalog backend.
//!
//! Used by tests and offline runs that need deterministic catalog answers
//! without the live API.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::types::{DiscoveredMovie, GenreId, MovieDetails, MovieId};
use crate::Catalog;

/// Catalog backed by fixed in-memory data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    movies: HashMap<MovieId, MovieDetails>,
    discover: HashMap<GenreId, Vec<DiscoveredMovie>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie to the catalog (builder pattern).
    pub fn with_movie(mut self, movie: MovieDetails) -> Self {
        self.movies.insert(movie.id, movie);
        self
    }

    /// Set the discovery results for one genre (builder pattern).
    ///
    /// Results should already be sorted by descending popularity, matching
    /// what the live API returns for `sort_by=popularity.desc`.
    pub fn with_discover(mut self, genre_id: GenreId, results: Vec<DiscoveredMovie>) -> Self {
        self.discover.insert(genre_id, results);
        self
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn movie_details(&self, movie_id: MovieId) -> Result<MovieDetails> {
        self.movies
            .get(&movie_id)
            .cloned()
            .ok_or(CatalogError::NotFound { movie_id })
    }

    async fn discover_by_genre(&self, genre_id: GenreId, _page: u32) -> Result<Vec<DiscoveredMovie>> {
        Ok(self.discover.get(&genre_id).cloned().unwrap_or_default())
    }
}
