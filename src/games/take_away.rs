//! Single-pile take-away game.

use serde::{Deserialize, Serialize};

use crate::core::{Convention, PileState, Score};
use crate::error::{Result, SolverError};
use crate::rules::RulesEngine;

/// One pile; a move removes between 1 and `max_take` counters.
///
/// Successors are listed by counters taken, ascending: from 5 with the
/// default limit the order is 4, 3, 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeAway {
    max_take: u32,
    convention: Convention,
}

impl Default for TakeAway {
    fn default() -> Self {
        Self {
            max_take: 3,
            convention: Convention::Normal,
        }
    }
}

impl TakeAway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_take(mut self, max_take: u32) -> Self {
        assert!(max_take >= 1, "Must allow taking at least one counter");
        self.max_take = max_take;
        self
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    #[must_use]
    pub fn max_take(&self) -> u32 {
        self.max_take
    }

    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }
}

impl RulesEngine for TakeAway {
    fn name(&self) -> &'static str {
        "take-away"
    }

    fn successors<'a>(&'a self, state: &'a PileState) -> impl Iterator<Item = PileState> + 'a {
        let counters = match state.piles() {
            [n] => *n,
            _ => 0,
        };
        (1..=self.max_take.min(counters)).map(move |take| PileState::single(counters - take))
    }

    fn is_terminal(&self, state: &PileState, is_maximizing: bool) -> Option<Score> {
        state
            .is_cleared()
            .then(|| self.convention.terminal_score(is_maximizing))
    }

    fn validate(&self, state: &PileState) -> Result<()> {
        if state.arity() != 1 {
            return Err(SolverError::invalid_state(
                state,
                format!("take-away is played on a single pile, got {}", state.arity()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successors(game: &TakeAway, n: u32) -> Vec<u32> {
        let state = PileState::single(n);
        game.successors(&state).map(|s| s.piles()[0]).collect()
    }

    #[test]
    fn test_successor_order() {
        let game = TakeAway::new();
        assert_eq!(successors(&game, 5), vec![4, 3, 2]);
        assert_eq!(successors(&game, 2), vec![1, 0]);
        assert!(successors(&game, 0).is_empty());
    }

    #[test]
    fn test_custom_max_take() {
        let game = TakeAway::new().with_max_take(5);
        assert_eq!(successors(&game, 6), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_terminal_only_when_empty() {
        let game = TakeAway::new();
        assert_eq!(game.is_terminal(&PileState::single(0), true), Some(Score::MinimizerWins));
        assert_eq!(game.is_terminal(&PileState::single(0), false), Some(Score::MaximizerWins));
        assert_eq!(game.is_terminal(&PileState::single(1), true), None);
    }

    #[test]
    fn test_misere_terminal() {
        let game = TakeAway::new().with_convention(Convention::Misere);
        assert_eq!(game.is_terminal(&PileState::single(0), true), Some(Score::MaximizerWins));
    }

    #[test]
    fn test_validate_single_pile() {
        let game = TakeAway::new();
        assert!(game.validate(&PileState::single(7)).is_ok());
        assert!(matches!(
            game.validate(&PileState::from_piles(&[1, 2])),
            Err(SolverError::InvalidState { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "at least one counter")]
    fn test_zero_max_take_panics() {
        let _ = TakeAway::new().with_max_take(0);
    }
}
