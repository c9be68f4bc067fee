use serde::Serialize;

use crate::RectangleError;

use super::position::Position;

/// An axis-aligned region of cells, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{width}x{height} at {top_left}")]
pub struct Rectangle {
    top_left: Position,
    width: usize,
    height: usize,
}

impl Rectangle {
    pub fn new(top_left: Position, width: usize, height: usize) -> Result<Self, RectangleError> {
        if width == 0 || height == 0 {
            return Err(RectangleError { width, height });
        }
        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    #[must_use]
    pub const fn top_left(&self) -> Position {
        self.top_left
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn bottom_right(&self) -> Position {
        self.top_left.offset(self.width - 1, self.height - 1)
    }

    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x() >= self.top_left.x()
            && position.x() < self.top_left.x() + self.width
            && position.y() >= self.top_left.y()
            && position.y() < self.top_left.y() + self.height
    }

    /// Checks whether every cell of `other` is also a cell of `self`.
    #[must_use]
    pub const fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.contains(other.top_left) && self.contains(other.bottom_right())
    }

    /// Iterates over every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Self {
            top_left,
            width,
            height,
        } = *self;
        (0..height).flat_map(move |dy| (0..width).map(move |dx| top_left.offset(dx, dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_extent() {
        let origin = Position::new(0, 0);
        assert_eq!(
            Rectangle::new(origin, 0, 2),
            Err(RectangleError {
                width: 0,
                height: 2
            })
        );
        assert!(Rectangle::new(origin, 2, 0).is_err());
        assert!(Rectangle::new(origin, 1, 1).is_ok());
    }

    #[test]
    fn test_geometry() {
        let rect = Rectangle::new(Position::new(2, 3), 3, 2).unwrap();
        assert_eq!(rect.area(), 6);
        assert_eq!(rect.bottom_right(), Position::new(4, 4));
        assert!(rect.contains(Position::new(2, 3)));
        assert!(rect.contains(Position::new(4, 4)));
        assert!(!rect.contains(Position::new(5, 4)));
        assert!(!rect.contains(Position::new(2, 5)));
    }

    #[test]
    fn test_positions_row_major() {
        let rect = Rectangle::new(Position::new(1, 1), 2, 2).unwrap();
        let positions: Vec<_> = rect.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_contains_rectangle_matches_cellwise_definition() {
        let outer = Rectangle::new(Position::new(0, 0), 3, 3).unwrap();
        let inner = Rectangle::new(Position::new(1, 1), 2, 2).unwrap();
        let sticking_out = Rectangle::new(Position::new(2, 2), 2, 2).unwrap();

        for (a, b) in [(outer, inner), (inner, outer), (outer, sticking_out)] {
            let cellwise = b.positions().all(|p| a.contains(p));
            assert_eq!(a.contains_rectangle(&b), cellwise, "{a} contains {b}");
        }
        assert!(outer.contains_rectangle(&outer));
    }
}
