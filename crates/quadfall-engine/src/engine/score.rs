use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// Number of cleared cells accumulated in a game.
///
/// A score only grows: [`Score::add`] takes an unsigned amount and construction from a
/// signed value rejects negatives.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Score(u64);

impl Score {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn try_from_signed(value: i64) -> Result<Self, ScoreError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ScoreError { value })
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn add(self, points: u64) -> Self {
        Self(self.0.saturating_add(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Score::ZERO.value(), 0);
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(Score::try_from_signed(12), Ok(Score::new(12)));
        assert_eq!(Score::try_from_signed(-1), Err(ScoreError { value: -1 }));
    }

    #[test]
    fn test_add_never_decreases() {
        let score = Score::new(10);
        assert_eq!(score.add(0), score);
        assert_eq!(score.add(4).value(), 14);
        assert_eq!(Score::new(u64::MAX).add(1).value(), u64::MAX);
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Score::new(42)).unwrap(), "42");
    }
}
