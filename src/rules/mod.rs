//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal successor positions for each game state
//! - Terminal conditions and their outcome
//! - Which positions are well-formed
//!
//! The search calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::RulesEngine;
