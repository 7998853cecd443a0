//! Rule modules for the Nim family.
//!
//! Each game is an interchangeable `RulesEngine` strategy over `PileState`:
//! - `TakeAway`: one pile, remove 1 to `max_take` counters
//! - `Nim`: many piles, reduce one pile to any smaller count
//! - `SplitPile`: split one pile into two unequal non-empty piles
//!
//! Every game can be played normal or misère via `Convention` and
//! defaults to normal play.

mod nim;
mod split;
mod take_away;

pub use nim::Nim;
pub use split::SplitPile;
pub use take_away::TakeAway;
