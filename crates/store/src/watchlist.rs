//! Watchlist interaction store.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Result;
use crate::types::Interaction;

/// Read access to user–movie watchlist interactions.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Every interaction row in the store, in insertion order.
    ///
    /// The exporter consumes this as one bulk read; the table is assumed to
    /// fit in memory for a training batch.
    async fn all_interactions(&self) -> Result<Vec<Interaction>>;

    /// The set of movie ids one user has added to their watchlist.
    async fn watched_movie_ids(&self, user_id: &str) -> Result<HashSet<i64>>;

    /// Whether the user has at least one watchlist entry.
    async fn has_watchlist(&self, user_id: &str) -> Result<bool>;
}

/// Postgres-backed watchlist store over the `watchlists` table.
#[derive(Clone)]
pub struct PgWatchlistStore {
    pool: PgPool,
}

impl PgWatchlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to Postgres with a small pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl WatchlistStore for PgWatchlistStore {
    async fn all_interactions(&self) -> Result<Vec<Interaction>> {
        // Ordered by primary key so repeated exports see rows in the same
        // first-seen order.
        let rows = sqlx::query_as::<_, Interaction>(
            "SELECT user_id, movie_id FROM watchlists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn watched_movie_ids(&self, user_id: &str) -> Result<HashSet<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT movie_id FROM watchlists WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids.into_iter().collect())
    }

    async fn has_watchlist(&self, user_id: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM watchlists WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
