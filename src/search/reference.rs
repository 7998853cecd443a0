//! Unoptimized reference search.
//!
//! Plain recursive minimax with no pruning and no cache, plus a game-tree
//! node counter. Both walk the full tree, so they are only practical on
//! small positions; they exist to check the optimized search against.

use crate::core::{PileState, Score};
use crate::rules::RulesEngine;

/// Exhaustive minimax score of `state` with the given player to move.
pub fn exhaustive_minimax<R: RulesEngine>(rules: &R, state: &PileState, is_maximizing: bool) -> Score {
    if let Some(score) = rules.is_terminal(state, is_maximizing) {
        return score;
    }

    let scores = rules
        .successors(state)
        .map(|next| exhaustive_minimax(rules, &next, !is_maximizing));

    let best = if is_maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(Score::win_for(!is_maximizing))
}

/// Number of nodes in the full, unpruned game tree rooted at `state`.
///
/// Counts every path separately, so transpositions are counted once per
/// path that reaches them. This is the most calls a search can make.
pub fn game_tree_size<R: RulesEngine>(rules: &R, state: &PileState, is_maximizing: bool) -> u64 {
    if rules.is_terminal(state, is_maximizing).is_some() {
        return 1;
    }

    1 + rules
        .successors(state)
        .map(|next| game_tree_size(rules, &next, !is_maximizing))
        .sum::<u64>()
}
