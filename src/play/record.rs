//! Game records produced by self-play.

use serde::{Deserialize, Serialize};

use crate::core::{PileState, Score};

/// One of the two players, by seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves from the starting position.
    First,
    /// Moves second.
    Second,
}

impl Side {
    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first player"),
            Side::Second => write!(f, "second player"),
        }
    }
}

/// A single move in a recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who moved.
    pub side: Side,

    /// Position before the move.
    pub from: PileState,

    /// Position after the move.
    pub to: PileState,

    /// Score the mover's search reported, from the mover's point of view.
    pub predicted: Score,
}

/// A complete game from start to terminal position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Starting position.
    pub start: PileState,

    /// Moves in order.
    pub turns: Vec<Turn>,

    /// Position the game ended in.
    pub final_state: PileState,

    /// Winner of the game.
    pub winner: Side,
}

impl GameRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the start position was already over.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Moves made by one side.
    pub fn turns_by(&self, side: Side) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(move |t| t.side == side)
    }
}
