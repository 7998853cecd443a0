//! Move selection on top of the minimax search.
//!
//! The player to move is always treated as the maximizer. Successors are
//! tried in the rules engine's order and the first one that is a forced win
//! is taken, which makes the choice deterministic (leftmost tie-break).

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{PileState, Score};
use crate::error::Result;
use crate::rules::RulesEngine;

use super::minimax::MinimaxSearch;

/// A recommended move: the successor to play and its minimax score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    /// `MaximizerWins` if the move forces a win for the player choosing it.
    pub score: Score,

    /// Position after the move.
    pub state: PileState,
}

impl<R: RulesEngine> MinimaxSearch<R> {
    /// Pick a move for the player to move at `state`.
    ///
    /// - The first successor scoring a win is returned with
    ///   `Score::MaximizerWins`.
    /// - If no successor wins, the last successor examined is returned with
    ///   its losing score. It is not chosen to lose more slowly.
    /// - If `state` has no successors at all, `state` itself is returned
    ///   with `Score::MaximizerWins`. This sentinel does not look at whose
    ///   turn it is; for the built-in games the terminal check flags such
    ///   positions before a caller gets here.
    ///
    /// Fails with `InvalidState` if the rules engine rejects `state`.
    /// Resets statistics before searching.
    pub fn best_move(&mut self, state: &PileState) -> Result<BestMove> {
        self.engine().validate(state)?;

        let start = Instant::now();
        self.stats_mut().reset();

        let (engine, mut searcher) = self.split();
        let mut last: Option<BestMove> = None;

        for next in engine.successors(state) {
            // The opponent moves next.
            let score = searcher.node(&next, false, Score::LOWEST, Score::HIGHEST, 1);
            let wins = score.is_win();
            last = Some(BestMove { score, state: next });
            if wins {
                break;
            }
        }

        let best = last.unwrap_or_else(|| {
            debug!("{}: {} has no successors, returning sentinel", engine.name(), state);
            BestMove {
                score: Score::MaximizerWins,
                state: state.clone(),
            }
        });

        self.stats_mut().time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{}: best move from {} is {} (score {}) [{} nodes]",
            self.engine().name(),
            state,
            best.state,
            best.score,
            self.stats().nodes_visited,
        );
        Ok(best)
    }
}
