//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which positions are reachable in one move
//! - When the game is over and who won
//! - Which positions are well-formed for the game

use crate::core::{PileState, Score};
use crate::error::{Result, SolverError};

/// Rules engine trait.
///
/// Games implement this trait to define their rules. The search calls
/// these methods during minimax and move selection, and never interprets
/// game-specific concepts directly.
///
/// ## Implementation Notes
///
/// - `successors`: Must be deterministic; the enumeration order decides
///   which move the selector reports when several are equally good.
/// - `successors`: Every successor must be strictly smaller in some
///   well-founded measure (e.g. total counters). The search performs no
///   cycle detection.
/// - `is_terminal`: Return `None` if the game continues. Must be a pure
///   function of its inputs.
/// - `validate`: Reject positions the game cannot represent.
pub trait RulesEngine {
    /// Short human-readable name of the game.
    fn name(&self) -> &'static str;

    /// Lazily enumerate every position reachable by one legal move.
    ///
    /// An empty sequence means the player to move has no legal action.
    fn successors<'a>(&'a self, state: &'a PileState) -> impl Iterator<Item = PileState> + 'a;

    /// Check if the game is over.
    ///
    /// Returns `Some(score)` if `state` is a completed game with the player
    /// denoted by `is_maximizing` to move, `None` if it continues.
    fn is_terminal(&self, state: &PileState, is_maximizing: bool) -> Option<Score>;

    /// Check that `state` is a legal position for this game.
    ///
    /// The default accepts any state with at least one pile.
    fn validate(&self, state: &PileState) -> Result<()> {
        if state.arity() == 0 {
            return Err(SolverError::invalid_state(state, "a position needs at least one pile"));
        }
        Ok(())
    }

    // === Convenience Methods ===

    /// Whether the player to move has at least one legal move.
    fn has_moves(&self, state: &PileState) -> bool {
        self.successors(state).next().is_some()
    }
}
