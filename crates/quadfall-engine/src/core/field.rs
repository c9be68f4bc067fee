use crate::FieldError;

use super::{FIELD_HEIGHT, FIELD_WIDTH, block::Block, position::Position};

/// A single row of the field.
pub type FieldRow = [Option<Block>; FIELD_WIDTH];

/// Full grid of the field, indexed `[y][x]`.
pub type FieldGrid = [FieldRow; FIELD_HEIGHT];

/// The board of settled blocks.
///
/// `Field` is a fixed 8×20 grid where every cell is either empty or holds a [`Block`].
/// It exposes only validated mutation primitives:
///
/// - [`Field::place_block`] refuses occupied or out-of-bounds cells
/// - [`Field::remove_block`] is idempotent on empty cells
/// - [`Field::get_block`] can be queried with any position, returning `None` outside
///
/// The backing grid is never handed out by reference; [`Field::grid`] returns a copy.
///
/// # Example
///
/// ```
/// use quadfall_engine::{Block, Color, Field, Position};
///
/// let mut field = Field::new();
/// let pos = Position::new(0, 19);
/// field.place_block(pos, Block::new(Color::Red)).unwrap();
///
/// assert!(field.place_block(pos, Block::new(Color::Blue)).is_err());
/// assert_eq!(field.get_block(Position::new(100, 100)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: FieldGrid,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    pub const WIDTH: usize = FIELD_WIDTH;
    pub const HEIGHT: usize = FIELD_HEIGHT;
    pub const CELL_COUNT: usize = FIELD_WIDTH * FIELD_HEIGHT;

    pub const EMPTY_ROW: FieldRow = [None; FIELD_WIDTH];

    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [Self::EMPTY_ROW; FIELD_HEIGHT],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        Self::WIDTH
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        Self::HEIGHT
    }

    /// Returns a copy of the whole grid.
    #[must_use]
    pub const fn grid(&self) -> FieldGrid {
        self.rows
    }

    /// Iterates over the rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &FieldRow> {
        self.rows.iter()
    }

    #[must_use]
    pub const fn is_valid_position(&self, position: Position) -> bool {
        position.is_within(Self::WIDTH, Self::HEIGHT)
    }

    /// Returns the block at `position`, or `None` for empty and out-of-bounds cells.
    #[must_use]
    pub const fn get_block(&self, position: Position) -> Option<Block> {
        if !self.is_valid_position(position) {
            return None;
        }
        self.rows[position.y()][position.x()]
    }

    /// Checks whether `position` holds no block. Out-of-bounds positions count as empty.
    #[must_use]
    pub const fn is_empty(&self, position: Position) -> bool {
        self.get_block(position).is_none()
    }

    pub fn place_block(&mut self, position: Position, block: Block) -> Result<(), FieldError> {
        let cell = self.cell_mut(position)?;
        if cell.is_some() {
            return Err(FieldError::Occupied { position });
        }
        *cell = Some(block);
        Ok(())
    }

    /// Places every block, or none of them if any cell is out of bounds or occupied.
    pub fn place_blocks(&mut self, blocks: &[(Block, Position)]) -> Result<(), FieldError> {
        for &(_, position) in blocks {
            if !self.is_valid_position(position) {
                return Err(FieldError::OutOfBounds { position });
            }
            if !self.is_empty(position) {
                return Err(FieldError::Occupied { position });
            }
        }
        for &(block, position) in blocks {
            self.place_block(position, block)?;
        }
        Ok(())
    }

    /// Empties the cell at `position`. Removing from an empty cell is not an error.
    pub fn remove_block(&mut self, position: Position) -> Result<(), FieldError> {
        self.take_block(position).map(|_| ())
    }

    /// Empties the cell at `position` and returns what it held.
    pub fn take_block(&mut self, position: Position) -> Result<Option<Block>, FieldError> {
        Ok(self.cell_mut(position)?.take())
    }

    pub fn clear(&mut self) {
        self.rows.fill(Self::EMPTY_ROW);
    }

    /// Checks whether the top row (`y = 0`) holds any block.
    #[must_use]
    pub fn has_block_in_top_row(&self) -> bool {
        self.rows[0].iter().any(Option::is_some)
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut Option<Block>, FieldError> {
        if !self.is_valid_position(position) {
            return Err(FieldError::OutOfBounds { position });
        }
        Ok(&mut self.rows[position.y()][position.x()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    const RED: Block = Block::new(Color::Red);
    const BLUE: Block = Block::new(Color::Blue);

    #[test]
    fn test_initial_field_is_empty() {
        let field = Field::new();
        assert_eq!(field.occupied_count(), 0);
        for y in 0..Field::HEIGHT {
            for x in 0..Field::WIDTH {
                assert!(field.is_empty(Position::new(x, y)), "({x}, {y}) not empty");
            }
        }
        assert!(!field.has_block_in_top_row());
    }

    #[test]
    fn test_place_and_get() {
        let mut field = Field::new();
        let pos = Position::new(3, 10);
        field.place_block(pos, RED).unwrap();
        assert_eq!(field.get_block(pos), Some(RED));
        assert!(!field.is_empty(pos));
        assert_eq!(field.occupied_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_fails() {
        let mut field = Field::new();
        let pos = Position::new(0, 0);
        field.place_block(pos, RED).unwrap();
        assert_eq!(
            field.place_block(pos, BLUE),
            Err(FieldError::Occupied { position: pos })
        );
        assert_eq!(field.get_block(pos), Some(RED));
    }

    #[test]
    fn test_place_blocks_is_all_or_nothing() {
        let mut field = Field::new();
        field.place_block(Position::new(1, 1), BLUE).unwrap();
        let blocks = [(RED, Position::new(0, 0)), (RED, Position::new(1, 1))];
        assert_eq!(
            field.place_blocks(&blocks),
            Err(FieldError::Occupied {
                position: Position::new(1, 1)
            })
        );
        assert!(field.is_empty(Position::new(0, 0)));
        assert_eq!(field.occupied_count(), 1);

        let blocks = [(RED, Position::new(0, 0)), (RED, Position::new(1, 0))];
        field.place_blocks(&blocks).unwrap();
        assert_eq!(field.occupied_count(), 3);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut field = Field::new();
        let outside = Position::new(Field::WIDTH, 0);
        assert_eq!(
            field.place_block(outside, RED),
            Err(FieldError::OutOfBounds { position: outside })
        );
        assert_eq!(
            field.remove_block(Position::new(0, Field::HEIGHT)),
            Err(FieldError::OutOfBounds {
                position: Position::new(0, Field::HEIGHT)
            })
        );
        assert_eq!(field.get_block(outside), None);
        assert!(field.is_empty(outside));
        assert!(!field.is_valid_position(outside));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut field = Field::new();
        let pos = Position::new(5, 5);
        field.place_block(pos, RED).unwrap();
        field.remove_block(pos).unwrap();
        field.remove_block(pos).unwrap();
        assert!(field.is_empty(pos));
    }

    #[test]
    fn test_top_row_detection() {
        let mut field = Field::new();
        field.place_block(Position::new(7, 1), RED).unwrap();
        assert!(!field.has_block_in_top_row());
        field.place_block(Position::new(7, 0), RED).unwrap();
        assert!(field.has_block_in_top_row());
    }

    #[test]
    fn test_clear() {
        let mut field = Field::new();
        field.place_block(Position::new(1, 1), RED).unwrap();
        field.place_block(Position::new(2, 19), BLUE).unwrap();
        field.clear();
        assert_eq!(field, Field::new());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut field = Field::new();
        field.place_block(Position::new(0, 19), RED).unwrap();
        let copy = field.clone();
        field.remove_block(Position::new(0, 19)).unwrap();
        assert_eq!(copy.get_block(Position::new(0, 19)), Some(RED));
    }

    #[test]
    fn test_grid_is_a_copy() {
        let mut field = Field::new();
        let mut grid = field.grid();
        grid[19][0] = Some(RED);
        assert!(field.is_empty(Position::new(0, 19)));

        field.place_block(Position::new(1, 19), BLUE).unwrap();
        assert_eq!(grid[19][1], None);
        assert_eq!(field.grid()[19][1], Some(BLUE));
    }
}
