//! Core rows exchanged with the two stores.

use serde::{Deserialize, Serialize};

/// One watchlist interaction: a user added a movie to a watchlist.
///
/// User ids are opaque strings (auth-provider identifiers); movie ids are
/// catalog ids. Duplicate `(user, movie)` rows are possible and meaningful:
/// the exporter preserves them as repeated implicit signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Interaction {
    pub user_id: String,
    pub movie_id: i64,
}

/// One recommendation candidate as persisted by the external trainer.
///
/// The trainer writes a JSON array of these per user, sorted by descending
/// score. Item ids are stringified movie ids; the trainer maps its dense
/// matrix indices back to raw ids before persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub score: f64,
}
