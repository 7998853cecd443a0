//! Terminal scoring convention.
//!
//! The same move rules can be played two ways: whoever takes the last
//! counter wins (normal play) or loses (misère play). Rule modules delegate
//! the terminal score to `Convention` so the choice lives in one place.

use serde::{Deserialize, Serialize};

use super::score::Score;

/// Who wins when the game reaches a terminal position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Last player to move wins: the player facing a terminal position loses.
    #[default]
    Normal,
    /// Last player to move loses: the player facing a terminal position wins.
    Misere,
}

impl Convention {
    /// Score of a terminal position for the player to move.
    #[inline]
    #[must_use]
    pub const fn terminal_score(self, is_maximizing: bool) -> Score {
        match self {
            Convention::Normal => Score::win_for(!is_maximizing),
            Convention::Misere => Score::win_for(is_maximizing),
        }
    }
}
