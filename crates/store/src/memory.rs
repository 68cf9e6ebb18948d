//! In-memory store backends for tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::error::Result;
use crate::scores::ScoreStore;
use crate::types::{Interaction, ScoredItem};
use crate::watchlist::WatchlistStore;

/// Watchlist store backed by a fixed row list.
#[derive(Debug, Clone, Default)]
pub struct MemoryWatchlistStore {
    rows: Vec<Interaction>,
}

impl MemoryWatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one interaction row (builder pattern). Rows keep insertion order,
    /// like the Postgres backend's primary-key ordering.
    pub fn with(mut self, user_id: &str, movie_id: i64) -> Self {
        self.rows.push(Interaction {
            user_id: user_id.to_string(),
            movie_id,
        });
        self
    }
}

#[async_trait]
impl WatchlistStore for MemoryWatchlistStore {
    async fn all_interactions(&self) -> Result<Vec<Interaction>> {
        Ok(self.rows.clone())
    }

    async fn watched_movie_ids(&self, user_id: &str) -> Result<HashSet<i64>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| row.movie_id)
            .collect())
    }

    async fn has_watchlist(&self, user_id: &str) -> Result<bool> {
        Ok(self.rows.iter().any(|row| row.user_id == user_id))
    }
}

/// Score store backed by a map of user id to candidate list.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HashMap<String, Vec<ScoredItem>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate list for one user (builder pattern).
    pub fn with_scores(mut self, user_id: &str, items: Vec<ScoredItem>) -> Self {
        self.scores.insert(user_id.to_string(), items);
        self
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn load(&self, user_id: &str) -> Result<Option<Vec<ScoredItem>>> {
        Ok(self.scores.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_watchlist_rows_keep_insertion_order() {
        let store = MemoryWatchlistStore::new()
            .with("a", 10)
            .with("b", 20)
            .with("a", 30);

        let rows = store.all_interactions().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].movie_id, 10);
        assert_eq!(rows[2].movie_id, 30);

        assert!(store.has_watchlist("a").await.unwrap());
        assert!(!store.has_watchlist("c").await.unwrap());

        let watched = store.watched_movie_ids("a").await.unwrap();
        assert_eq!(watched, HashSet::from([10, 30]));
    }

    #[tokio::test]
    async fn test_score_store_returns_none_for_unknown_user() {
        let store = MemoryScoreStore::new().with_scores(
            "a",
            vec![ScoredItem {
                item_id: "10".to_string(),
                score: 0.5,
            }],
        );

        assert!(store.load("a").await.unwrap().is_some());
        assert!(store.load("b").await.unwrap().is_none());
    }
}
