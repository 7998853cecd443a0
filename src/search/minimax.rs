//! Core minimax search with alpha-beta pruning and memoization.
//!
//! Each node is resolved in this order:
//! 1. Terminal check from the rules engine (never cached, always exact)
//! 2. Transposition cache lookup, when memoization is enabled
//! 3. Successor loop in the rules engine's order, tightening the window
//!    and stopping once `beta <= alpha` when pruning is enabled
//! 4. Cache write of the resulting score

use std::time::Instant;

use log::{debug, error, trace};

use crate::core::{PileState, Score};
use crate::rules::RulesEngine;

use super::cache::{CacheWrite, TranspositionCache};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Main minimax search context.
///
/// Generic over the rules engine type. Owns the transposition cache, so
/// independent searches never share state; the cache lives until the
/// search is dropped or `reset`.
pub struct MinimaxSearch<R: RulesEngine> {
    /// The game rules engine.
    engine: R,

    /// Search configuration.
    config: SearchConfig,

    /// Memoized scores.
    cache: TranspositionCache,

    /// Search statistics.
    stats: SearchStats,
}

impl<R: RulesEngine> MinimaxSearch<R> {
    /// Create a new search context with an empty cache.
    pub fn new(engine: R, config: SearchConfig) -> Self {
        let cache = TranspositionCache::with_capacity(config.cache_capacity);
        Self {
            engine,
            config,
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Start from an existing cache, e.g. one warmed by an earlier search
    /// over the same rules engine.
    pub fn with_cache(mut self, cache: TranspositionCache) -> Self {
        self.cache = cache;
        self
    }

    /// Minimax score of `state` with the given player to move.
    ///
    /// `alpha` and `beta` are the current window; pass `Score::LOWEST` and
    /// `Score::HIGHEST` at the root, or use [`solve`](Self::solve). The
    /// result is exact whenever the window is full. Statistics accumulate
    /// across calls.
    pub fn minimax(
        &mut self,
        state: &PileState,
        is_maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        let (_, mut searcher) = self.split();
        searcher.node(state, is_maximizing, alpha, beta, 0)
    }

    /// Exact minimax score of `state`, searched with the full window.
    ///
    /// Resets statistics before searching.
    pub fn solve(&mut self, state: &PileState, is_maximizing: bool) -> Score {
        let start = Instant::now();
        self.stats.reset();

        let score = self.minimax(state, is_maximizing, Score::LOWEST, Score::HIGHEST);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{}: solved {} (maximizing to move: {}) = {} [{} nodes, {} cache hits, {} cutoffs]",
            self.engine.name(),
            state,
            is_maximizing,
            score,
            self.stats.nodes_visited,
            self.stats.cache_hits,
            self.stats.cutoffs,
        );
        score
    }

    /// Clear the cache and statistics.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }

    /// Clear the cache only.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the transposition cache.
    #[must_use]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Get the engine reference.
    pub fn engine(&self) -> &R {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Take back the rules engine and the warmed cache.
    pub fn into_parts(self) -> (R, TranspositionCache) {
        (self.engine, self.cache)
    }

    pub(super) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Borrow the engine alongside a recursion context over the other fields.
    pub(super) fn split(&mut self) -> (&R, Searcher<'_, R>) {
        let searcher = Searcher {
            engine: &self.engine,
            config: &self.config,
            cache: &mut self.cache,
            stats: &mut self.stats,
        };
        (&self.engine, searcher)
    }
}

/// Borrowed view used by the recursion.
///
/// Keeping the engine behind a shared reference lets a caller walk a lazy
/// successor iterator while the recursion writes to the cache.
pub(super) struct Searcher<'a, R: RulesEngine> {
    engine: &'a R,
    config: &'a SearchConfig,
    cache: &'a mut TranspositionCache,
    stats: &'a mut SearchStats,
}

impl<'a, R: RulesEngine> Searcher<'a, R> {
    pub(super) fn node(
        &mut self,
        state: &PileState,
        is_maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        depth: u32,
    ) -> Score {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(score) = self.engine.is_terminal(state, is_maximizing) {
            self.stats.terminal_hits += 1;
            return score;
        }

        if self.config.memoize {
            if let Some(score) = self.cache.get(state, is_maximizing) {
                self.stats.cache_hits += 1;
                return score;
            }
            self.stats.cache_misses += 1;
        }

        // A narrowed window can cut before the true value is known.
        let full_window = alpha == Score::LOWEST && beta == Score::HIGHEST;

        let engine = self.engine;
        let mut best: Option<Score> = None;

        for next in engine.successors(state) {
            let score = self.node(&next, !is_maximizing, alpha, beta, depth + 1);

            best = Some(match best {
                None => score,
                Some(b) if is_maximizing => b.max(score),
                Some(b) => b.min(score),
            });

            if is_maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if self.config.prune && beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff at {} (depth {}) after {}", state, depth, next);
                break;
            }
        }

        let score = best.unwrap_or_else(|| {
            // Non-terminal but no legal move: the player to move loses.
            debug!("{}: {} has no moves but is not terminal", engine.name(), state);
            Score::win_for(!is_maximizing)
        });

        if self.config.memoize && full_window {
            if let CacheWrite::Conflict { existing } =
                self.cache.insert(state.clone(), is_maximizing, score)
            {
                self.stats.cache_conflicts += 1;
                error!(
                    "{}: cache conflict at {} (maximizing to move: {}): cached {}, searched {}",
                    engine.name(),
                    state,
                    is_maximizing,
                    existing,
                    score,
                );
            }
        }

        score
    }
}
