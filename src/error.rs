//! Error types for the solver.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    #[error("invalid state {state}: {reason}")]
    InvalidState { state: String, reason: String },

    #[error("invalid score {value} (expected 1 or -1)")]
    InvalidScore { value: i64 },

    #[error("cannot parse state from '{input}': {reason}")]
    ParseState { input: String, reason: String },
}

impl SolverError {
    /// Build an `InvalidState` error for anything displayable.
    pub(crate) fn invalid_state(state: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        SolverError::InvalidState {
            state: state.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, SolverError>;
