//! Pile-based game state.
//!
//! A `PileState` is an ordered, fixed-arity tuple of pile counts. It is an
//! immutable value: every transition (`with_pile`, `split`) returns a new
//! state and leaves the original untouched.
//!
//! Equality and hashing are structural and order-sensitive, so `(1, 2)` and
//! `(2, 1)` are different positions. A single-pile game is simply a state of
//! arity 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, SolverError};

/// Immutable tuple of pile counts.
///
/// Backed by a `SmallVec` so positions with up to 4 piles live inline
/// without heap allocation, which keeps cache keys cheap to clone.
///
/// ## Example
///
/// ```
/// use nim_solver::core::PileState;
///
/// let state = PileState::from_piles(&[3, 4, 5]);
/// let next = state.with_pile(1, 0);
///
/// assert_eq!(state.piles(), &[3, 4, 5]);
/// assert_eq!(next.piles(), &[3, 0, 5]);
/// assert_eq!(next.to_string(), "(3, 0, 5)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PileState(SmallVec<[u32; 4]>);

impl PileState {
    /// Create a single-pile state.
    #[must_use]
    pub fn single(count: u32) -> Self {
        let mut piles = SmallVec::new();
        piles.push(count);
        Self(piles)
    }

    /// Create a state from pile counts, in order.
    #[must_use]
    pub fn from_piles(piles: &[u32]) -> Self {
        Self(SmallVec::from_slice(piles))
    }

    /// Create a state from signed counts, rejecting negative piles.
    ///
    /// This is the boundary for callers whose counters come from a signed
    /// source. Counts that do not fit a `u32` are rejected as well.
    pub fn try_from_counts(counts: &[i64]) -> Result<Self> {
        counts
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                u32::try_from(count).map_err(|_| {
                    let reason = if count < 0 {
                        format!("pile {index} has negative count {count}")
                    } else {
                        format!("pile {index} count {count} is out of range")
                    };
                    SolverError::invalid_state(format!("{counts:?}"), reason)
                })
            })
            .collect()
    }

    /// All pile counts, in order.
    #[inline]
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.0
    }

    /// Number of piles.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Count of a single pile, if it exists.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Total counters on the table.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Largest pile, or 0 for a state with no piles.
    #[must_use]
    pub fn max_pile(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Whether every pile is empty.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// New state with pile `index` set to `count`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn with_pile(&self, index: usize, count: u32) -> Self {
        let mut piles = self.0.clone();
        piles[index] = count;
        Self(piles)
    }

    /// New state with pile `index` replaced in place by `left, right`.
    ///
    /// The remainder keeps the split pile's position; later piles shift
    /// one place to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn split(&self, index: usize, left: u32, right: u32) -> Self {
        let mut piles = SmallVec::with_capacity(self.0.len() + 1);
        piles.extend_from_slice(&self.0[..index]);
        piles.push(left);
        piles.push(right);
        piles.extend_from_slice(&self.0[index + 1..]);
        Self(piles)
    }
}

impl FromIterator<u32> for PileState {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<u32> for PileState {
    fn from(count: u32) -> Self {
        Self::single(count)
    }
}

impl fmt::Display for PileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [count] = self.piles() {
            return write!(f, "{count}");
        }
        write!(f, "(")?;
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, ")")
    }
}

/// Parses `"4"`, `"1,2,3"` or `"(1, 2, 3)"`.
impl FromStr for PileState {
    type Err = SolverError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Err(SolverError::ParseState {
                input: input.to_string(),
                reason: "no piles given".to_string(),
            });
        }

        let counts = inner
            .split(',')
            .map(|part| {
                part.trim().parse::<i64>().map_err(|e| SolverError::ParseState {
                    input: input.to_string(),
                    reason: format!("'{}': {e}", part.trim()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::try_from_counts(&counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash(state: &PileState) -> u64 {
        let mut h = DefaultHasher::new();
        state.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_single_pile() {
        let state = PileState::single(4);
        assert_eq!(state.arity(), 1);
        assert_eq!(state.pile(0), Some(4));
        assert_eq!(state.total(), 4);
        assert!(!state.is_cleared());
        assert_eq!(state, PileState::from(4));
    }

    #[test]
    fn test_structural_equality_is_order_sensitive() {
        let a = PileState::from_piles(&[1, 2]);
        let b = PileState::from_piles(&[1, 2]);
        let c = PileState::from_piles(&[2, 1]);

        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_transitions_do_not_mutate() {
        let state = PileState::from_piles(&[3, 4, 5]);

        let taken = state.with_pile(2, 1);
        let split = state.split(1, 1, 3);

        assert_eq!(state.piles(), &[3, 4, 5]);
        assert_eq!(taken.piles(), &[3, 4, 1]);
        assert_eq!(split.piles(), &[3, 1, 3, 5]);
    }

    #[test]
    fn test_cleared() {
        assert!(PileState::from_piles(&[0, 0, 0]).is_cleared());
        assert!(PileState::single(0).is_cleared());
        assert!(!PileState::from_piles(&[0, 1]).is_cleared());
    }

    #[test]
    fn test_try_from_counts_rejects_negative() {
        let ok = PileState::try_from_counts(&[1, 0, 7]).unwrap();
        assert_eq!(ok.piles(), &[1, 0, 7]);

        let err = PileState::try_from_counts(&[1, -2]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidState { .. }));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PileState::single(4).to_string(), "4");
        assert_eq!(PileState::from_piles(&[1, 0, 3]).to_string(), "(1, 0, 3)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<PileState>().unwrap(), PileState::single(4));
        assert_eq!(
            "(1, 2, 3)".parse::<PileState>().unwrap(),
            PileState::from_piles(&[1, 2, 3])
        );
        assert_eq!(
            " 5,0 ".parse::<PileState>().unwrap(),
            PileState::from_piles(&[5, 0])
        );

        assert!(matches!(
            "".parse::<PileState>(),
            Err(SolverError::ParseState { .. })
        ));
        assert!(matches!(
            "1,x".parse::<PileState>(),
            Err(SolverError::ParseState { .. })
        ));
        assert!(matches!(
            "3,-1".parse::<PileState>(),
            Err(SolverError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let state = PileState::from_piles(&[1, 2, 3]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[1,2,3]");

        let deserialized: PileState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
