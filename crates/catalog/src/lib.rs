//! # Catalog Crate
//!
//! Lookup adapter for the third-party movie catalog (a TMDB-style REST API).
//!
//! ## Components
//!
//! - **types**: Wire types returned by the catalog (movies, genres, discovery results)
//! - **tmdb**: reqwest-based client for the live catalog API
//! - **memory**: In-memory catalog backend for tests and offline runs
//! - **error**: Error types for catalog lookups
//!
//! The rest of the system talks to the catalog exclusively through the
//! [`Catalog`] trait, so the live client and the in-memory backend are
//! interchangeable.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, TmdbClient};
//!
//! let client = TmdbClient::new(api_key, None);
//! let movie = client.movie_details(603).await?;
//! println!("{} has {} genres", movie.title, movie.genres.len());
//! ```

use async_trait::async_trait;

pub mod error;
pub mod memory;
pub mod tmdb;
pub mod types;

pub use error::{CatalogError, Result};
pub use memory::StaticCatalog;
pub use tmdb::TmdbClient;
pub use types::{DiscoveredMovie, Genre, GenreId, MovieDetails, MovieId};

/// Read-only view of the movie catalog.
///
/// Both methods are independent lookups with no ordering dependency between
/// calls, so callers are free to fan them out concurrently.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Full metadata for a single movie, including its genre list.
    ///
    /// Fails with [`CatalogError::NotFound`] for ids the catalog does not know.
    async fn movie_details(&self, movie_id: MovieId) -> Result<MovieDetails>;

    /// Discovery query for one genre, sorted by descending popularity.
    ///
    /// `page` is 1-based, matching the upstream API.
    async fn discover_by_genre(&self, genre_id: GenreId, page: u32) -> Result<Vec<DiscoveredMovie>>;
}
