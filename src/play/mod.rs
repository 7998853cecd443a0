//! Self-play between two perfect players.
//!
//! Both seats share one `MinimaxSearch`, so the cache warmed by one player's
//! search serves the other. Each turn the player to move is treated as the
//! maximizer and plays whatever `best_move` recommends.

mod record;

pub use record::{GameRecord, Side, Turn};

use log::debug;

use crate::core::PileState;
use crate::error::Result;
use crate::rules::RulesEngine;
use crate::search::MinimaxSearch;

/// Play a game from `start` until it ends.
///
/// The game ends when the rules engine reports a terminal position, or when
/// the player to move has no legal move (that player loses). The first side
/// moves from `start`.
///
/// Fails with `InvalidState` if the rules engine rejects `start`.
pub fn self_play<R: RulesEngine>(search: &mut MinimaxSearch<R>, start: &PileState) -> Result<GameRecord> {
    search.engine().validate(start)?;

    let mut state = start.clone();
    let mut side = Side::First;
    let mut turns = Vec::new();

    let winner = loop {
        if let Some(score) = search.engine().is_terminal(&state, true) {
            break if score.is_win() { side } else { side.other() };
        }
        if !search.engine().has_moves(&state) {
            break side.other();
        }

        let best = search.best_move(&state)?;
        turns.push(Turn {
            side,
            from: state,
            to: best.state.clone(),
            predicted: best.score,
        });
        state = best.state;
        side = side.other();
    };

    debug!(
        "{}: game from {} ended at {} after {} moves, {} wins",
        search.engine().name(),
        start,
        state,
        turns.len(),
        winner,
    );

    Ok(GameRecord {
        start: start.clone(),
        turns,
        final_state: state,
        winner,
    })
}
