//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls into the minimax recursion.
    pub nodes_visited: u64,

    /// Nodes resolved directly by the terminal check.
    pub terminal_hits: u64,

    /// Nodes answered from the transposition cache.
    pub cache_hits: u64,

    /// Cache lookups that had to search.
    pub cache_misses: u64,

    /// Times the alpha-beta window closed and siblings were skipped.
    pub cutoffs: u64,

    /// Cache writes that disagreed with an existing entry.
    /// Always zero for a rules engine with a pure terminal check.
    pub cache_conflicts: u64,

    /// Deepest recursion reached (root = 0).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of cache lookups that hit.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
