//! Pile-splitting game (Grundy's game).

use serde::{Deserialize, Serialize};

use crate::core::{Convention, PileState, Score};
use crate::rules::RulesEngine;

/// A move replaces one pile of `n` with two unequal, non-empty piles that
/// sum to `n`.
///
/// The split pile is replaced in place by `(i, n - i)`, smaller part first,
/// for `i` in `1..ceil(n / 2)`. Piles of 1 or 2 cannot be split unequally,
/// so the game is over once no pile exceeds 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPile {
    convention: Convention,
}

impl SplitPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }
}

impl RulesEngine for SplitPile {
    fn name(&self) -> &'static str {
        "split-pile"
    }

    fn successors<'a>(&'a self, state: &'a PileState) -> impl Iterator<Item = PileState> + 'a {
        state
            .piles()
            .iter()
            .enumerate()
            .flat_map(move |(pile, &counters)| {
                let upper = counters / 2 + counters % 2;
                (1..upper).map(move |smaller| state.split(pile, smaller, counters - smaller))
            })
    }

    fn is_terminal(&self, state: &PileState, is_maximizing: bool) -> Option<Score> {
        (state.max_pile() <= 2).then(|| self.convention.terminal_score(is_maximizing))
    }
}
