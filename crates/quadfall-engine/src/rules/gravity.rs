//! Per-column gravity for settled blocks.
//!
//! Each column is scanned from the second-to-last row upward; every block is moved to the
//! lowest empty cell reachable directly below it. A single pass settles each column, but
//! callers that need a stable field should use [`settle`], which repeats
//! [`apply_gravity`] until nothing moves.

use crate::core::{Field, Position};

/// Drops every unsupported block to the lowest free cell in its column.
///
/// Returns `true` if at least one block moved.
pub fn apply_gravity(field: &mut Field) -> bool {
    let mut moved = false;
    for column in 0..field.width() {
        moved |= apply_column_gravity(column, field);
    }
    moved
}

/// Applies gravity until the field is stable and returns the number of passes that moved
/// something.
pub fn settle(field: &mut Field) -> usize {
    let mut passes = 0;
    // Each moving pass lowers at least one block, so the loop is bounded by the
    // total height the blocks can descend.
    while passes <= Field::CELL_COUNT * Field::HEIGHT && apply_gravity(field) {
        passes += 1;
    }
    passes
}

/// Checks whether the block at `position` has an empty cell directly below it.
///
/// Empty cells and blocks on the bottom row cannot fall.
#[must_use]
pub fn can_fall(position: Position, field: &Field) -> bool {
    if field.get_block(position).is_none() || position.y() + 1 >= field.height() {
        return false;
    }
    field.is_empty(position.offset(0, 1))
}

/// Returns the lowest row a block at (`column`, `start_y`) can reach by falling straight
/// down. Returns `start_y` when the cell below is occupied or is the floor.
#[must_use]
pub fn lowest_empty_row(column: usize, start_y: usize, field: &Field) -> usize {
    let mut lowest = start_y;
    for y in start_y + 1..field.height() {
        if !field.is_empty(Position::new(column, y)) {
            break;
        }
        lowest = y;
    }
    lowest
}

fn apply_column_gravity(column: usize, field: &mut Field) -> bool {
    let mut moved = false;
    for y in (0..field.height() - 1).rev() {
        let from = Position::new(column, y);
        if field.is_empty(from) {
            continue;
        }
        let lowest = lowest_empty_row(column, y, field);
        if lowest == y {
            continue;
        }
        // Both cells are in bounds: `from` was just read and `lowest` lies below it.
        if let Ok(Some(block)) = field.take_block(from) {
            let to = Position::new(column, lowest);
            if field.place_block(to, block).is_ok() {
                moved = true;
            }
        }
    }
    moved
}
