//! Minimax search configuration.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
///
/// Neither switch changes any result; they only trade memory and time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Memoize scores by (state, mover) in the transposition cache.
    pub memoize: bool,

    /// Stop enumerating siblings once the alpha-beta window closes.
    pub prune: bool,

    /// Initial capacity of the transposition cache.
    /// The cache still grows without bound past this.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            prune: true,
            cache_capacity: 4096,
        }
    }
}

impl SearchConfig {
    /// Plain exhaustive minimax: no cache, no pruning.
    pub fn exhaustive() -> Self {
        Self::default().with_memoization(false).with_pruning(false)
    }

    /// Create a new config with memoization switched on or off.
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Create a new config with alpha-beta pruning switched on or off.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Create a new config with a custom cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}
