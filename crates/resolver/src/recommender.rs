//! # Recommendation Resolver
//!
//! Coordinates the serving-time pipeline:
//! 1. Load the user's raw candidates from the score store
//! 2. Build the taste profile (watched set + watched genres)
//! 3. Annotate unwatched candidates with catalog genres, fan-out then join
//! 4. Apply the primary filter chain
//! 5. Fall back to genre discovery when the primary result is empty
//! 6. Truncate to the requested length
//!
//! The resolver never re-sorts model candidates: the trainer's descending
//! score order is trusted and preserved through every stage.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use catalog::Catalog;
use store::{ScoreStore, ScoredItem, WatchlistStore};

use crate::error::{RecommendError, Result};
use crate::filter_chain::FilterChain;
use crate::filters::{AlreadyWatchedFilter, GenreOverlapFilter};
use crate::profile::{build_taste_profile, TasteProfile};
use crate::types::{Candidate, Recommendation};

/// The serving-time resolver.
///
/// Stateless given its three data sources; every call recomputes from
/// scratch, so two calls against identical backing data return identical
/// output.
pub struct Recommender {
    watchlist: Arc<dyn WatchlistStore>,
    scores: Arc<dyn ScoreStore>,
    catalog: Arc<dyn Catalog>,
    filters: FilterChain,
}

impl Recommender {
    pub fn new(
        watchlist: Arc<dyn WatchlistStore>,
        scores: Arc<dyn ScoreStore>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let filters = FilterChain::new()
            .with_filter(AlreadyWatchedFilter)
            .with_filter(GenreOverlapFilter);
        Self {
            watchlist,
            scores,
            catalog,
            filters,
        }
    }

    /// Resolve at most `top_n` recommendations for `user_id`.
    ///
    /// Fails with [`RecommendError::NoScoresAvailable`] when the trainer has
    /// not produced an artifact for this user. An empty result is not an
    /// error: it is the degraded-but-safe outcome when filtering leaves
    /// nothing and no fallback applies.
    pub async fn recommend(&self, user_id: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let start = Instant::now();

        let raw = self
            .scores
            .load(user_id)
            .await?
            .ok_or_else(|| RecommendError::NoScoresAvailable {
                user_id: user_id.to_string(),
            })?;
        info!(user_id, candidates = raw.len(), "loaded raw model candidates");

        let profile = build_taste_profile(&*self.watchlist, self.catalog.clone(), user_id).await?;
        info!(
            user_id,
            watched = profile.watched.len(),
            genres = profile.watched_genres.len(),
            "built taste profile"
        );

        let candidates = self.annotate_candidates(raw, &profile).await?;
        let mut kept = self.filters.apply(candidates, &profile);

        if kept.is_empty() && !profile.watched_genres.is_empty() {
            kept = self.fallback_by_genre(&profile).await?;
            info!(
                user_id,
                fallback = kept.len(),
                "primary filter empty, used genre discovery fallback"
            );
        }

        kept.truncate(top_n);
        info!(
            user_id,
            returned = kept.len(),
            elapsed = ?start.elapsed(),
            "resolved recommendations"
        );
        Ok(kept.into_iter().map(Recommendation::from).collect())
    }

    /// Annotate each unwatched candidate with its catalog genres.
    ///
    /// Lookups fan out concurrently and are all joined before returning:
    /// filtering must never start while responses are still arriving.
    /// Watched candidates skip the lookup; the watched filter drops them
    /// regardless of genres.
    async fn annotate_candidates(
        &self,
        raw: Vec<ScoredItem>,
        profile: &TasteProfile,
    ) -> Result<Vec<Candidate>> {
        let mut lookups = JoinSet::new();
        for item in raw.iter().filter(|item| !profile.is_watched(&item.item_id)) {
            let Ok(movie_id) = item.item_id.parse::<i64>() else {
                warn!(item_id = %item.item_id, "candidate id is not a catalog id, treating as no genres");
                continue;
            };
            let catalog = self.catalog.clone();
            let item_id = item.item_id.clone();
            lookups.spawn(async move { (item_id, catalog.movie_details(movie_id).await) });
        }

        let mut genres_by_item: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(joined) = lookups.join_next().await {
            let (item_id, result) = joined?;
            match result {
                Ok(details) => {
                    genres_by_item.insert(item_id, details.genre_names());
                }
                Err(err) => {
                    warn!(%item_id, error = %err, "candidate lookup failed, contributes no genres");
                }
            }
        }

        Ok(raw
            .into_iter()
            .map(|item| {
                let genres = genres_by_item.remove(&item.item_id).unwrap_or_default();
                Candidate::model(item.item_id, item.score).with_genres(genres)
            })
            .collect())
    }

    /// Popularity discovery over the user's watched genres.
    ///
    /// One page-1 query per genre, in the profile's deterministic genre
    /// order. Results are merged with first-seen dedup across genres,
    /// watched items excluded, and every pick carries the placeholder score
    /// with the fallback source tag.
    async fn fallback_by_genre(&self, profile: &TasteProfile) -> Result<Vec<Candidate>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut picks = Vec::new();

        for (name, &genre_id) in &profile.watched_genres {
            let results = self.catalog.discover_by_genre(genre_id, 1).await?;
            debug!(genre = %name, results = results.len(), "fallback discovery page");

            for movie in results {
                let item_id = movie.id.to_string();
                if profile.is_watched(&item_id) || !seen.insert(item_id.clone()) {
                    continue;
                }
                picks.push(Candidate::fallback(item_id));
            }
        }

        Ok(picks)
    }
}
