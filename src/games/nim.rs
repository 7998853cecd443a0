//! Multi-pile Nim.

use serde::{Deserialize, Serialize};

use crate::core::{Convention, PileState, Score};
use crate::rules::RulesEngine;

/// Any number of piles; a move reduces exactly one pile to any smaller
/// count.
///
/// Successors walk the piles left to right and, for each pile, the
/// remaining count from 0 upwards. Terminal when every pile is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nim {
    convention: Convention,
}

impl Nim {
    /// Normal-play Nim: whoever takes the last counter wins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Misère Nim: whoever takes the last counter loses.
    pub fn misere() -> Self {
        Self {
            convention: Convention::Misere,
        }
    }

    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }
}

impl RulesEngine for Nim {
    fn name(&self) -> &'static str {
        match self.convention {
            Convention::Normal => "nim",
            Convention::Misere => "misere-nim",
        }
    }

    fn successors<'a>(&'a self, state: &'a PileState) -> impl Iterator<Item = PileState> + 'a {
        state
            .piles()
            .iter()
            .enumerate()
            .flat_map(move |(pile, &counters)| {
                (0..counters).map(move |remain| state.with_pile(pile, remain))
            })
    }

    fn is_terminal(&self, state: &PileState, is_maximizing: bool) -> Option<Score> {
        state
            .is_cleared()
            .then(|| self.convention.terminal_score(is_maximizing))
    }
}
