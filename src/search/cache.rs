//! Transposition cache: (state, mover) → exact minimax score.
//!
//! Entries never expire. A game outcome under perfect play is fixed, so a
//! cached score stays valid for the lifetime of the cache.
//!
//! Caching on `(state, mover)` alone, without the alpha-beta window, is only
//! sound because scores are binary: a pruned subtree can only have skipped
//! siblings that were already dominated, so the value it returns is still
//! exact. Extending the search to more than two outcomes would require
//! storing a bound kind (exact/lower/upper) next to each score.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::core::{PileState, Score};

/// Outcome of a cache write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheWrite {
    /// The key was new.
    Inserted,
    /// The key was present with the same score.
    Unchanged,
    /// The key was present with a different score, which was kept.
    Conflict { existing: Score },
}

/// Memoization table keyed by `(state, is_maximizing)`.
///
/// The first write for a key wins; later writes never overwrite it.
#[derive(Clone, Debug, Default)]
pub struct TranspositionCache {
    entries: FxHashMap<(PileState, bool), Score>,
}

impl TranspositionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Look up the score for a position.
    #[must_use]
    pub fn get(&self, state: &PileState, is_maximizing: bool) -> Option<Score> {
        // Tuple keys cannot be borrowed piecewise, so the lookup key is owned.
        self.entries.get(&(state.clone(), is_maximizing)).copied()
    }

    /// Record the score for a position.
    pub fn insert(&mut self, state: PileState, is_maximizing: bool, score: Score) -> CacheWrite {
        match self.entries.entry((state, is_maximizing)) {
            Entry::Vacant(slot) => {
                slot.insert(score);
                CacheWrite::Inserted
            }
            Entry::Occupied(slot) if *slot.get() == score => CacheWrite::Unchanged,
            Entry::Occupied(slot) => CacheWrite::Conflict {
                existing: *slot.get(),
            },
        }
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(state, is_maximizing, score)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&PileState, bool, Score)> {
        self.entries
            .iter()
            .map(|((state, is_maximizing), &score)| (state, *is_maximizing, score))
    }
}
