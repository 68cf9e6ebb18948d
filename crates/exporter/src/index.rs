//! First-seen dense index assignment.

use std::collections::HashMap;

/// Assigns sequential 1-based indices to distinct keys in the order they are
/// first seen.
///
/// This is the arena+index half of the export: raw user and movie ids become
/// the dense coordinates of the interaction matrix. Assignment order is the
/// caller's iteration order, so the mapping is deterministic for a given row
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct DenseIndex {
    slots: HashMap<String, u32>,
}

impl DenseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `key`, assigning the next free index on first sight.
    pub fn get_or_assign(&mut self, key: &str) -> u32 {
        let next = self.slots.len() as u32 + 1;
        *self.slots.entry(key.to_string()).or_insert(next)
    }

    /// Index for `key` if it has been seen.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.slots.get(key).copied()
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
