//! Binary game-theoretic outcome.
//!
//! There is no draw in this domain: every position is either a forced win
//! for the maximizing player (`+1`) or for the minimizing player (`-1`).
//! The same two values double as the alpha-beta window extremes.

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Outcome under perfect play, from the maximizing player's point of view.
///
/// Ordered so that `MinimizerWins < MaximizerWins`, which lets the search
/// use `max`/`min` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Score {
    /// The minimizing player wins (`-1`).
    MinimizerWins = -1,
    /// The maximizing player wins (`+1`).
    MaximizerWins = 1,
}

impl Score {
    /// Lowest value in the domain, the initial alpha.
    pub const LOWEST: Score = Score::MinimizerWins;

    /// Highest value in the domain, the initial beta.
    pub const HIGHEST: Score = Score::MaximizerWins;

    /// Score meaning "the given player wins".
    #[inline]
    #[must_use]
    pub const fn win_for(is_maximizing: bool) -> Self {
        if is_maximizing {
            Score::MaximizerWins
        } else {
            Score::MinimizerWins
        }
    }

    /// Numeric value, `1` or `-1`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Whether the score is strictly positive.
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Score::MaximizerWins)
    }

    /// The opposite outcome.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Score::MaximizerWins => Score::MinimizerWins,
            Score::MinimizerWins => Score::MaximizerWins,
        }
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> i8 {
        score.value()
    }
}

impl TryFrom<i8> for Score {
    type Error = SolverError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Score::MaximizerWins),
            -1 => Ok(Score::MinimizerWins),
            other => Err(SolverError::InvalidScore {
                value: i64::from(other),
            }),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Score::MinimizerWins < Score::MaximizerWins);
        assert_eq!(Score::LOWEST.max(Score::HIGHEST), Score::MaximizerWins);
        assert_eq!(Score::LOWEST.min(Score::HIGHEST), Score::MinimizerWins);
    }

    #[test]
    fn test_values() {
        assert_eq!(Score::MaximizerWins.value(), 1);
        assert_eq!(Score::MinimizerWins.value(), -1);
        assert!(Score::MaximizerWins.is_win());
        assert!(!Score::MinimizerWins.is_win());
        assert_eq!(Score::MaximizerWins.flip(), Score::MinimizerWins);
        assert_eq!(Score::win_for(true), Score::MaximizerWins);
        assert_eq!(Score::win_for(false), Score::MinimizerWins);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Score::try_from(1i8), Ok(Score::MaximizerWins));
        assert_eq!(Score::try_from(-1i8), Ok(Score::MinimizerWins));
        assert_eq!(
            Score::try_from(0i8),
            Err(SolverError::InvalidScore { value: 0 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::MaximizerWins.to_string(), "+1");
        assert_eq!(Score::MinimizerWins.to_string(), "-1");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Score::MinimizerWins).unwrap();
        assert_eq!(json, "-1");

        let score: Score = serde_json::from_str("1").unwrap();
        assert_eq!(score, Score::MaximizerWins);

        assert!(serde_json::from_str::<Score>("0").is_err());
    }
}
