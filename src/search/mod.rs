//! Exhaustive minimax search for two-player, zero-sum games.
//!
//! ## Overview
//!
//! - **Minimax**: Full-depth search; every score is the exact outcome under
//!   perfect play, `+1` for the maximizer or `-1` for the minimizer
//! - **Alpha-beta pruning**: Siblings are skipped once the window closes
//! - **Memoization**: Scores are cached by `(state, mover)` in a
//!   `TranspositionCache` owned by the search
//! - **Move selection**: `best_move` takes the leftmost winning successor
//!
//! Pruning and memoization are pure optimizations and can be switched off
//! in `SearchConfig` without changing any result.
//!
//! ## Usage
//!
//! ```rust
//! use nim_solver::core::{PileState, Score};
//! use nim_solver::games::Nim;
//! use nim_solver::search::{MinimaxSearch, SearchConfig};
//!
//! let mut search = MinimaxSearch::new(Nim::new(), SearchConfig::default());
//!
//! // (1, 2, 3) has nim-sum 0: the player to move loses.
//! let state = PileState::from_piles(&[1, 2, 3]);
//! assert_eq!(search.solve(&state, true), Score::MinimizerWins);
//!
//! // (1, 2, 4) is a win; the first winning reply is (1, 2, 3).
//! let best = search.best_move(&PileState::from_piles(&[1, 2, 4])).unwrap();
//! assert_eq!(best.score, Score::MaximizerWins);
//! assert_eq!(best.state, PileState::from_piles(&[1, 2, 3]));
//! ```

pub mod cache;
pub mod config;
pub mod minimax;
pub mod reference;
pub mod selector;
pub mod stats;

// Re-export main types
pub use cache::{CacheWrite, TranspositionCache};
pub use config::SearchConfig;
pub use minimax::MinimaxSearch;
pub use selector::BestMove;
pub use stats::SearchStats;
