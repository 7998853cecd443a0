//! # nim-solver
//!
//! A solver for two-player, zero-sum, perfect-information games of the Nim
//! family, built on exhaustive minimax with alpha-beta pruning and
//! memoization.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: The search never interprets game rules. Games
//!    plug in through the `RulesEngine` trait.
//!
//! 2. **Exact Scores**: Every score is the game-theoretic outcome under
//!    perfect play, `+1` or `-1`. There are no heuristics and no depth
//!    limits; positions must be small enough to solve outright.
//!
//! 3. **Explicit Cache Lifecycle**: The transposition cache is owned by a
//!    `MinimaxSearch`, so independent searches never leak into each other.
//!
//! ## Modules
//!
//! - `core`: Pile states, scores, terminal conventions
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: Take-away, Nim and pile-splitting rule modules
//! - `search`: Minimax, alpha-beta pruning, transposition cache, move selection
//! - `play`: Self-play between two perfect players
//! - `error`: Error type and `Result` alias

pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Convention, PileState, Score};

pub use crate::error::{Result, SolverError};

pub use crate::games::{Nim, SplitPile, TakeAway};

pub use crate::rules::RulesEngine;

pub use crate::search::{
    BestMove, CacheWrite, MinimaxSearch, SearchConfig, SearchStats, TranspositionCache,
};

pub use crate::play::{self_play, GameRecord, Side, Turn};
