//! Collision checks between a 2×2 cell grid and the field.
//!
//! A grid anchored at `position` can be placed when every present cell lands inside the
//! field ([`is_out_of_bounds`]) on an empty cell ([`is_colliding`]). Absent cells never
//! collide, which lets a partially empty pattern hang over a wall.

use super::{
    field::Field,
    pattern::{PATTERN_SIZE, PatternCells},
    position::Position,
};

fn present_cells(position: Position, cells: &PatternCells) -> impl Iterator<Item = Position> + '_ {
    (0..PATTERN_SIZE).flat_map(move |dy| {
        (0..PATTERN_SIZE)
            .filter(move |&dx| cells[dy][dx].is_some())
            .map(move |dx| position.offset(dx, dy))
    })
}

/// Checks whether the cells can be placed at `position` on `field`.
#[must_use]
pub fn can_place_block(position: Position, cells: &PatternCells, field: &Field) -> bool {
    !is_out_of_bounds(position, cells, field) && !is_colliding(position, cells, field)
}

/// Checks whether any present cell overlaps a settled block.
#[must_use]
pub fn is_colliding(position: Position, cells: &PatternCells, field: &Field) -> bool {
    present_cells(position, cells).any(|pos| !field.is_empty(pos))
}

/// Checks whether any present cell falls outside the field.
#[must_use]
pub fn is_out_of_bounds(position: Position, cells: &PatternCells, field: &Field) -> bool {
    present_cells(position, cells).any(|pos| !field.is_valid_position(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Block, Color};

    const X: Option<Block> = Some(Block::new(Color::Yellow));

    #[test]
    fn test_full_pattern_on_empty_field() {
        let field = Field::new();
        let cells = [[X, X], [X, X]];
        assert!(can_place_block(Position::new(0, 0), &cells, &field));
        assert!(can_place_block(Position::new(6, 18), &cells, &field));
        assert!(is_out_of_bounds(Position::new(7, 0), &cells, &field));
        assert!(is_out_of_bounds(Position::new(0, 19), &cells, &field));
        assert!(!can_place_block(Position::new(7, 18), &cells, &field));
    }

    #[test]
    fn test_absent_cells_may_hang_outside() {
        let field = Field::new();
        let left_column_only = [[X, None], [X, None]];
        assert!(can_place_block(Position::new(7, 0), &left_column_only, &field));
        assert!(!is_out_of_bounds(Position::new(7, 0), &left_column_only, &field));
    }

    #[test]
    fn test_collision_with_settled_block() {
        let mut field = Field::new();
        field
            .place_block(Position::new(4, 10), Block::new(Color::Red))
            .unwrap();
        let cells = [[X, X], [X, X]];
        assert!(is_colliding(Position::new(3, 9), &cells, &field));
        assert!(!is_colliding(Position::new(3, 7), &cells, &field));
        assert!(!can_place_block(Position::new(4, 10), &cells, &field));

        let hollow = [[X, None], [None, None]];
        assert!(!is_colliding(Position::new(3, 9), &hollow, &field));
    }
}
