use serde::{Deserialize, Serialize};

use crate::PositionError;

/// A cell coordinate on the field.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left cell
/// - X increases rightward (columns)
/// - Y increases downward (rows)
///
/// Coordinates are never negative. Stepping past the left or top edge yields `None`
/// rather than wrapping, so callers can reject such moves before touching the field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a position from signed coordinates, failing if either is negative.
    ///
    /// ```
    /// use quadfall_engine::Position;
    ///
    /// assert_eq!(Position::try_new(2, 5).unwrap(), Position::new(2, 5));
    /// assert!(Position::try_new(-1, 0).is_err());
    /// ```
    pub fn try_new(x: i64, y: i64) -> Result<Self, PositionError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self::new(ux, uy)),
            _ => Err(PositionError { x, y }),
        }
    }

    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self::new(self.x - 1, self.y))
        }
    }

    #[must_use]
    pub const fn right(self) -> Option<Self> {
        match self.x.checked_add(1) {
            Some(x) => Some(Self::new(x, self.y)),
            None => None,
        }
    }

    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.y == 0 {
            None
        } else {
            Some(Self::new(self.x, self.y - 1))
        }
    }

    #[must_use]
    pub const fn down(self) -> Option<Self> {
        match self.y.checked_add(1) {
            Some(y) => Some(Self::new(self.x, y)),
            None => None,
        }
    }

    /// Returns this position shifted by a local offset (used for pattern cells).
    ///
    /// Saturates at `usize::MAX`, which is never inside a field.
    #[must_use]
    pub const fn offset(self, dx: usize, dy: usize) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Checks whether the position lies inside a `width`×`height` area anchored at the origin.
    #[must_use]
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_negative() {
        assert_eq!(Position::try_new(-1, 3), Err(PositionError { x: -1, y: 3 }));
        assert_eq!(Position::try_new(0, -7), Err(PositionError { x: 0, y: -7 }));
        assert_eq!(Position::try_new(0, 0), Ok(Position::new(0, 0)));
    }

    #[test]
    fn test_steps_stop_at_origin_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.left(), None);
        assert_eq!(origin.up(), None);
        assert_eq!(origin.right(), Some(Position::new(1, 0)));
        assert_eq!(origin.down(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Position::new(2, 3).offset(1, 1), Position::new(3, 4));
        let far = Position::new(usize::MAX - 1, usize::MAX);
        assert_eq!(far.offset(2, 1), Position::new(usize::MAX, usize::MAX));
        assert!(!far.offset(2, 1).is_within(8, 20));
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(7, 19).is_within(8, 20));
        assert!(!Position::new(8, 0).is_within(8, 20));
        assert!(!Position::new(0, 20).is_within(8, 20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
