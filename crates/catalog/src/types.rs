//! Wire types for the movie catalog.
//!
//! Field names follow the upstream TMDB JSON payloads so these types
//! deserialize directly from API responses.

use serde::{Deserialize, Serialize};

/// Catalog identifier for a movie.
pub type MovieId = i64;

/// Catalog identifier for a genre.
pub type GenreId = i64;

/// A movie genre as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Full movie metadata from `/movie/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Genre names for this movie, in catalog order.
    pub fn genre_names(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }

    /// Genre ids for this movie, in catalog order.
    pub fn genre_ids(&self) -> Vec<GenreId> {
        self.genres.iter().map(|g| g.id).collect()
    }
}

/// One result row from `/discover/movie`.
///
/// Discovery results carry flat `genre_ids` rather than embedded genre
/// objects, mirroring the upstream payload shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredMovie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

/// Paged envelope around discovery results.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<DiscoveredMovie>,
}
