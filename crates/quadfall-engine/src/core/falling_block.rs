use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    FIELD_WIDTH, collision,
    block::Block,
    field::Field,
    pattern::{BlockPattern, PatternCells, Rotation},
    position::Position,
};

/// Where a newly spawned falling block appears: centered horizontally on the top row.
pub const SPAWN_POSITION: Position = Position::new(FIELD_WIDTH / 2 - 1, 0);

/// Direction of a one-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
}

/// Direction of a quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    const fn apply(self, rotation: Rotation) -> Rotation {
        match self {
            Self::Clockwise => rotation.rotated_right(),
            Self::CounterClockwise => rotation.rotated_left(),
        }
    }
}

/// The active, player-controlled piece.
///
/// A falling block pairs an immutable [`BlockPattern`] with a mutable top-left position
/// and rotation. Movement methods shift unconditionally; legality is checked separately
/// with [`FallingBlock::can_move`] and [`FallingBlock::can_rotate`], so callers are
/// expected to ask before they move.
///
/// # Example
///
/// ```
/// use quadfall_engine::{Block, BlockPattern, Color, Direction, FallingBlock, Field, PatternKind};
///
/// let b = Some(Block::new(Color::Blue));
/// let mut falling = FallingBlock::new(BlockPattern::new(PatternKind::Solid, [[b, b], [b, b]]));
/// let field = Field::new();
///
/// while falling.can_move(Direction::Down, &field) {
///     falling.move_down();
/// }
/// assert_eq!(falling.position().y(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingBlock {
    pattern: BlockPattern,
    position: Position,
    rotation: Rotation,
}

impl FallingBlock {
    /// Creates a falling block at [`SPAWN_POSITION`] with no rotation.
    #[must_use]
    pub const fn new(pattern: BlockPattern) -> Self {
        Self::with_position(pattern, SPAWN_POSITION)
    }

    #[must_use]
    pub const fn with_position(pattern: BlockPattern, position: Position) -> Self {
        Self {
            pattern,
            position,
            rotation: Rotation::Deg0,
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> &BlockPattern {
        &self.pattern
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the pattern cells with the current rotation applied.
    #[must_use]
    pub const fn cells(&self) -> PatternCells {
        self.pattern.rotate(self.rotation)
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Shifts one cell left. At column 0 the position is left unchanged.
    pub fn move_left(&mut self) {
        if let Some(position) = self.position.left() {
            self.position = position;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(position) = self.position.right() {
            self.position = position;
        }
    }

    pub fn move_down(&mut self) {
        if let Some(position) = self.position.down() {
            self.position = position;
        }
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.rotated_right();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotation = self.rotation.rotated_left();
    }

    /// Checks whether a one-cell move in `direction` lands on a legal placement.
    #[must_use]
    pub fn can_move(&self, direction: Direction, field: &Field) -> bool {
        let candidate = match direction {
            Direction::Left => self.position.left(),
            Direction::Right => self.position.right(),
            Direction::Down => self.position.down(),
        };
        let Some(candidate) = candidate else {
            return false;
        };
        self.can_place_at(candidate, self.rotation, field)
    }

    /// Checks whether rotating in `direction` in place lands on a legal placement.
    #[must_use]
    pub fn can_rotate(&self, direction: RotationDirection, field: &Field) -> bool {
        self.can_place_at(self.position, direction.apply(self.rotation), field)
    }

    /// Checks whether the current position and rotation is a legal placement.
    #[must_use]
    pub fn fits(&self, field: &Field) -> bool {
        self.can_place_at(self.position, self.rotation, field)
    }

    fn can_place_at(&self, position: Position, rotation: Rotation, field: &Field) -> bool {
        collision::can_place_block(position, &self.pattern.rotate(rotation), field)
    }

    /// Returns every present cell with its absolute field position.
    ///
    /// This is the enumeration used both for rendering and for fixing the block into the
    /// field when it lands.
    #[must_use]
    pub fn blocks(&self) -> ArrayVec<(Block, Position), 4> {
        self.pattern
            .occupied_cells(self.rotation)
            .map(|(dx, dy, block)| (block, self.position.offset(dx, dy)))
            .collect()
    }
}
