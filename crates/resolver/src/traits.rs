//! Core trait for the candidate filter stages.

use crate::profile::TasteProfile;
use crate::types::Candidate;

/// A single filtering stage over the candidate list.
///
/// Filters take ownership of the candidates and return the kept subset in
/// the same relative order — the trainer pre-sorts by descending score and
/// no stage may re-sort.
pub trait Filter: Send + Sync {
    /// Name of this filter, for logging.
    fn name(&self) -> &str;

    /// Apply this filter against the user's taste profile.
    fn apply(&self, candidates: Vec<Candidate>, profile: &TasteProfile) -> Vec<Candidate>;
}
