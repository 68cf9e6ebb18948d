//! Taste profile building.
//!
//! Gathers everything the filter stages need about one user up front: the
//! watched-item set and the union of genres across watched movies. Catalog
//! lookups fan out concurrently and are joined before the profile is
//! returned, so later stages never observe a partial profile.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use catalog::{Catalog, GenreId};
use store::WatchlistStore;

use crate::error::Result;

/// Aggregated view of one user's watch history.
#[derive(Debug, Clone, Default)]
pub struct TasteProfile {
    pub user_id: String,
    /// Watched movie ids in their string form, the candidate key space.
    pub watched: HashSet<String>,
    /// Union of genres across watched movies, keyed by name with the
    /// catalog genre id as value. BTreeMap so fallback discovery iterates
    /// genres in a deterministic order.
    pub watched_genres: BTreeMap<String, GenreId>,
}

impl TasteProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn is_watched(&self, item_id: &str) -> bool {
        self.watched.contains(item_id)
    }

    /// Whether any of `genres` appears in the user's watched genres.
    pub fn likes_any_genre(&self, genres: &[String]) -> bool {
        genres.iter().any(|g| self.watched_genres.contains_key(g))
    }
}

/// Build a [`TasteProfile`] from the watchlist and catalog.
///
/// One catalog lookup per distinct watched movie, issued concurrently. A
/// failed lookup contributes no genres and is logged; it never fails the
/// profile build, so one stale id cannot starve a user's recommendations.
pub async fn build_taste_profile(
    watchlist: &dyn WatchlistStore,
    catalog: Arc<dyn Catalog>,
    user_id: &str,
) -> Result<TasteProfile> {
    let watched_ids = watchlist.watched_movie_ids(user_id).await?;

    let mut profile = TasteProfile::new(user_id);
    profile.watched = watched_ids.iter().map(|id| id.to_string()).collect();

    let mut lookups = JoinSet::new();
    for movie_id in watched_ids {
        let catalog = catalog.clone();
        lookups.spawn(async move { (movie_id, catalog.movie_details(movie_id).await) });
    }

    while let Some(joined) = lookups.join_next().await {
        let (movie_id, result) = joined?;
        match result {
            Ok(details) => {
                for genre in details.genres {
                    profile.watched_genres.insert(genre.name, genre.id);
                }
            }
            Err(err) => {
                warn!(movie_id, error = %err, "watched-movie lookup failed, contributes no genres");
            }
        }
    }

    debug!(
        user_id,
        watched = profile.watched.len(),
        genres = profile.watched_genres.len(),
        "built taste profile"
    );
    Ok(profile)
}
