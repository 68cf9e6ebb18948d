//! Candidate and recommendation types.

use serde::{Deserialize, Serialize};

/// Where a recommendation came from.
///
/// Fallback items keep the placeholder score of `0.0` on the wire, but the
/// tag is what callers should branch on — a legitimate model score of zero
/// must not be mistaken for fallback output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Scored by the offline matrix-factorization model.
    Model,
    /// Popularity discovery over the user's watched genres.
    Fallback,
}

/// A candidate flowing through the filter stages.
///
/// `genres` is populated from the catalog before filtering; an empty list
/// means the lookup failed or the movie is unknown, which the genre-overlap
/// filter treats as no overlap.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub item_id: String,
    pub score: f64,
    pub genres: Vec<String>,
    pub source: Source,
}

impl Candidate {
    /// A model-scored candidate, genres not yet annotated.
    pub fn model(item_id: impl Into<String>, score: f64) -> Self {
        Self {
            item_id: item_id.into(),
            score,
            genres: Vec::new(),
            source: Source::Model,
        }
    }

    /// A fallback candidate with the placeholder score.
    pub fn fallback(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            score: 0.0,
            genres: Vec::new(),
            source: Source::Fallback,
        }
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }
}

/// Final resolver output: ordered, at most `top_n` long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item_id: String,
    pub score: f64,
    pub source: Source,
}

impl From<Candidate> for Recommendation {
    fn from(candidate: Candidate) -> Self {
        Self {
            item_id: candidate.item_id,
            score: candidate.score,
            source: candidate.source,
        }
    }
}
