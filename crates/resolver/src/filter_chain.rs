//! Chains candidate filters into a single pass.

use tracing::debug;

use crate::profile::TasteProfile;
use crate::traits::Filter;
use crate::types::Candidate;

/// Applies a sequence of filters in order.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .with_filter(AlreadyWatchedFilter)
///     .with_filter(GenreOverlapFilter);
///
/// let kept = chain.apply(candidates, &profile);
/// ```
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the chain (builder pattern).
    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every filter in order, logging the count at each stage.
    pub fn apply(&self, candidates: Vec<Candidate>, profile: &TasteProfile) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, profile);
            debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "applied candidate filter"
            );
        }
        current
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}
