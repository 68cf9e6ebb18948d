//! Error types for export runs.

use thiserror::Error;

/// Errors that can occur during an interaction export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Zero interactions in the store. A zero-row matrix cannot be factored,
    /// so the run fails instead of writing a degenerate file.
    #[error("no interaction data to export")]
    NoData,

    /// The watchlist store could not be read. Not retried here; the
    /// scheduler that invokes the export owns retry policy.
    #[error(transparent)]
    Store(#[from] store::StoreError),

    /// Writing the export file failed.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ExportError>;
