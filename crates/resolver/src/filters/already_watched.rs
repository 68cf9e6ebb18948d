//! Filter that removes movies already on the user's watchlist.
//!
//! Always the first stage: a watched item is never recommended, whatever
//! its score.

use crate::profile::TasteProfile;
use crate::traits::Filter;
use crate::types::Candidate;

/// Drops candidates present in the user's watched set.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, profile: &TasteProfile) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !profile.is_watched(&candidate.item_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watched_candidates_are_dropped() {
        let mut profile = TasteProfile::new("u1");
        profile.watched.insert("100".to_string());
        profile.watched.insert("200".to_string());

        let candidates = vec![
            Candidate::model("100", 0.9),
            Candidate::model("101", 0.8),
            Candidate::model("200", 0.7),
            Candidate::model("300", 0.6),
        ];

        let kept = AlreadyWatchedFilter.apply(candidates, &profile);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].item_id, "101");
        assert_eq!(kept[1].item_id, "300");
    }

    #[test]
    fn test_empty_watched_set_keeps_everything() {
        let profile = TasteProfile::new("u1");
        let candidates = vec![Candidate::model("1", 0.5)];

        let kept = AlreadyWatchedFilter.apply(candidates, &profile);
        assert_eq!(kept.len(), 1);
    }
}
