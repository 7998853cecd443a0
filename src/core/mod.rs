//! Core value types: game state, scores, and terminal conventions.
//!
//! These are game-agnostic. Rule modules produce and consume them; the
//! search only compares, hashes and clones them.

pub mod convention;
pub mod score;
pub mod state;

pub use convention::Convention;
pub use score::Score;
pub use state::PileState;
