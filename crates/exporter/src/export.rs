//! The export routine: bulk-read interactions, remap ids to dense indices,
//! write the matrix file.

use std::path::Path;

use tracing::info;

use store::WatchlistStore;

use crate::error::{ExportError, Result};
use crate::index::DenseIndex;

/// Counts from a completed export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Body lines written, duplicates included.
    pub interactions: usize,
    /// Distinct movies.
    pub items: usize,
    /// Distinct users.
    pub users: usize,
}

/// Export every interaction in the store to `output`, overwriting any
/// existing file.
///
/// Rows are emitted in store order, one line per raw row; duplicate
/// `(user, movie)` rows stay as repeated implicit signals. Movie ids are
/// indexed by their string form, matching the key space the trainer writes
/// back in its score artifacts.
///
/// Fails with [`ExportError::NoData`] before touching the filesystem when
/// the store holds zero interactions.
pub async fn export_interactions(
    store: &dyn WatchlistStore,
    output: &Path,
) -> Result<ExportSummary> {
    let rows = store.all_interactions().await?;
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut users = DenseIndex::new();
    let mut items = DenseIndex::new();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    // Header slot; counts are known only after the body pass.
    lines.push(String::new());

    for row in &rows {
        let u = users.get_or_assign(&row.user_id);
        let i = items.get_or_assign(&row.movie_id.to_string());
        lines.push(format!("{u} {i} 1"));
    }

    lines[0] = format!("{} {} {}", rows.len(), items.len(), users.len());

    tokio::fs::write(output, lines.join("\n")).await?;

    let summary = ExportSummary {
        interactions: rows.len(),
        items: items.len(),
        users: users.len(),
    };
    info!(
        interactions = summary.interactions,
        items = summary.items,
        users = summary.users,
        output = %output.display(),
        "exported implicit interaction matrix"
    );
    Ok(summary)
}
