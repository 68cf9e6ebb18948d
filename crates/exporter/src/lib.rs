//! # Exporter Crate
//!
//! Batch export of watchlist interactions into the implicit-feedback matrix
//! file consumed by the external matrix-factorization trainer.
//!
//! ## File format
//!
//! Plain text, newline-delimited, all integers space-separated:
//!
//! ```text
//! <rowCount> <itemCount> <userCount>
//! <userIdx> <itemIdx> 1
//! <userIdx> <itemIdx> 1
//! ...
//! ```
//!
//! The trailing `1` on every body line is the constant implicit-rating
//! weight: presence of an interaction is the only signal in this model.
//!
//! Indices are dense, 1-based, and assigned in first-seen order on every
//! run, so they are only meaningful within a single export file. The trainer
//! must treat each file as self-contained.
//!
//! ## Components
//!
//! - **index**: First-seen dense index assignment
//! - **export**: The export routine itself
//! - **error**: Error types for export runs

pub mod error;
pub mod export;
pub mod index;

pub use error::{ExportError, Result};
pub use export::{export_interactions, ExportSummary};
pub use index::DenseIndex;
