//! Filter that keeps candidates sharing a genre with the user's history.

use crate::profile::TasteProfile;
use crate::traits::Filter;
use crate::types::Candidate;

/// Keeps candidates with at least one genre in the user's watched genres.
///
/// Candidates whose genre annotation is empty (unknown id, failed lookup)
/// have no overlap by definition and are dropped. Relative order is
/// preserved; nothing is re-sorted.
pub struct GenreOverlapFilter;

impl Filter for GenreOverlapFilter {
    fn name(&self) -> &str {
        "GenreOverlapFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, profile: &TasteProfile) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| profile.likes_any_genre(&candidate.genres))
            .collect()
    }
}
