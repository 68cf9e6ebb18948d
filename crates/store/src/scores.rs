//! Score store: per-user recommendation candidates from the offline trainer.
//!
//! The trainer writes one JSON file per user under a shared directory,
//! `<recs_dir>/<user_id>.json`, each holding an array of `{itemId, score}`
//! records sorted by descending score. An absent file means the trainer has
//! not produced scores for that user yet; that is an expected state, not an
//! error, so [`ScoreStore::load`] models it as `None`.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ScoredItem;

/// Read access to the trainer's per-user score artifacts.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Raw candidates for one user, or `None` if no artifact exists yet.
    async fn load(&self, user_id: &str) -> Result<Option<Vec<ScoredItem>>>;
}

/// Score store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FsScoreStore {
    dir: PathBuf,
}

impl FsScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn artifact_path(&self, user_id: &str) -> Option<PathBuf> {
        // User ids are opaque strings; never let one name a path outside
        // the recs directory.
        if user_id.is_empty() || user_id.contains(['/', '\\']) || user_id.contains("..") {
            return None;
        }
        Some(self.dir.join(format!("{user_id}.json")))
    }
}

#[async_trait]
impl ScoreStore for FsScoreStore {
    async fn load(&self, user_id: &str) -> Result<Option<Vec<ScoredItem>>> {
        let Some(path) = self.artifact_path(user_id) else {
            return Ok(None);
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let items: Vec<ScoredItem> = serde_json::from_slice(&bytes)?;
        tracing::debug!(user_id, candidates = items.len(), path = %path.display(), "loaded score artifact");
        Ok(Some(items))
    }
}
