use serde::{Deserialize, Serialize};

use crate::PatternShapeError;

use super::block::Block;

/// Side length of a pattern (patterns are always 2×2).
pub const PATTERN_SIZE: usize = 2;

/// Cells of a pattern, indexed `[y][x]`. `None` marks an absent cell.
pub type PatternCells = [[Option<Block>; PATTERN_SIZE]; PATTERN_SIZE];

/// Rotation state of a falling block.
///
/// Rotation operations wrap around modulo 360°.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// 0° (spawn orientation).
    #[default]
    Deg0,
    /// 90° clockwise.
    Deg90,
    /// 180°.
    Deg180,
    /// 270° clockwise (90° counterclockwise).
    Deg270,
}

impl Rotation {
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg270,
            Self::Deg90 => Self::Deg0,
            Self::Deg180 => Self::Deg90,
            Self::Deg270 => Self::Deg180,
        }
    }

    /// Returns the rotation in clockwise degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Parses clockwise degrees; only multiples of 90 in `0..360` are accepted.
    #[must_use]
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    const fn quarter_turns(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }
}

/// Informational tag describing how a pattern's colors are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// All four cells share one color.
    Solid,
    /// Three cells of one color and one of another.
    ThreeOne,
    /// Two cells each of two colors.
    TwoTwo,
    /// Two cells of one color and one each of the other two.
    TwoOneOne,
}

impl PatternKind {
    pub const LEN: usize = 4;

    pub const ALL: [Self; Self::LEN] = [
        Self::Solid,
        Self::ThreeOne,
        Self::TwoTwo,
        Self::TwoOneOne,
    ];
}

/// Immutable 2×2 template a [`FallingBlock`](super::FallingBlock) is built from.
///
/// Rotation never mutates the pattern; [`BlockPattern::rotate`] returns a rotated copy of
/// the cells. For cells `[a, b] / [c, d]`:
///
/// - 90° gives `[c, a] / [d, b]`
/// - 180° gives `[d, c] / [b, a]`
/// - 270° gives `[b, d] / [a, c]`
///
/// # Example
///
/// ```
/// use quadfall_engine::{Block, BlockPattern, Color, PatternKind, Rotation};
///
/// let r = Some(Block::new(Color::Red));
/// let b = Some(Block::new(Color::Blue));
/// let pattern = BlockPattern::new(PatternKind::TwoTwo, [[r, r], [b, b]]);
///
/// assert_eq!(pattern.rotate(Rotation::Deg90), [[b, r], [b, r]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPattern {
    kind: PatternKind,
    cells: PatternCells,
}

impl BlockPattern {
    #[must_use]
    pub const fn new(kind: PatternKind, cells: PatternCells) -> Self {
        Self { kind, cells }
    }

    /// Builds a pattern from dynamically sized rows, failing unless they form a 2×2 grid.
    pub fn from_rows(kind: PatternKind, rows: &[Vec<Option<Block>>]) -> Result<Self, PatternShapeError> {
        let shape_error = || PatternShapeError {
            rows: rows.len(),
            widths: rows.iter().map(Vec::len).collect(),
        };
        let [top, bottom] = rows else {
            return Err(shape_error());
        };
        let top: [Option<Block>; PATTERN_SIZE] =
            top.as_slice().try_into().map_err(|_| shape_error())?;
        let bottom: [Option<Block>; PATTERN_SIZE] =
            bottom.as_slice().try_into().map_err(|_| shape_error())?;
        Ok(Self::new(kind, [top, bottom]))
    }

    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Returns the unrotated cells.
    #[must_use]
    pub const fn cells(&self) -> PatternCells {
        self.cells
    }

    /// Returns the cells rotated clockwise by `rotation`.
    #[must_use]
    pub const fn rotate(&self, rotation: Rotation) -> PatternCells {
        let mut cells = self.cells;
        let mut turns = rotation.quarter_turns();
        while turns > 0 {
            cells = rotated_right(&cells);
            turns -= 1;
        }
        cells
    }

    /// Returns the cell at local coordinate (`x`, `y`) after rotation.
    ///
    /// Coordinates outside the 2×2 grid yield `None`.
    #[must_use]
    pub const fn block_at(&self, x: usize, y: usize, rotation: Rotation) -> Option<Block> {
        if x >= PATTERN_SIZE || y >= PATTERN_SIZE {
            return None;
        }
        self.rotate(rotation)[y][x]
    }

    /// Iterates over the present cells as `(dx, dy, block)` for the given rotation.
    pub fn occupied_cells(&self, rotation: Rotation) -> impl Iterator<Item = (usize, usize, Block)> {
        let cells = self.rotate(rotation);
        (0..PATTERN_SIZE).flat_map(move |dy| {
            (0..PATTERN_SIZE).filter_map(move |dx| cells[dy][dx].map(|block| (dx, dy, block)))
        })
    }
}

/// Rotates a 2×2 cell grid by 90° clockwise.
const fn rotated_right(cells: &PatternCells) -> PatternCells {
    let mut rotated = [[None; PATTERN_SIZE]; PATTERN_SIZE];
    let mut y = 0;
    while y < PATTERN_SIZE {
        let mut x = 0;
        while x < PATTERN_SIZE {
            rotated[y][x] = cells[PATTERN_SIZE - 1 - x][y];
            x += 1;
        }
        y += 1;
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    const A: Option<Block> = Some(Block::new(Color::Blue));
    const B: Option<Block> = Some(Block::new(Color::Red));
    const C: Option<Block> = Some(Block::new(Color::Yellow));
    const D: Option<Block> = None;

    fn abcd() -> BlockPattern {
        BlockPattern::new(PatternKind::TwoOneOne, [[A, B], [C, D]])
    }

    #[test]
    fn test_rotate_each_angle() {
        let pattern = abcd();
        assert_eq!(pattern.rotate(Rotation::Deg0), [[A, B], [C, D]]);
        assert_eq!(pattern.rotate(Rotation::Deg90), [[C, A], [D, B]]);
        assert_eq!(pattern.rotate(Rotation::Deg180), [[D, C], [B, A]]);
        assert_eq!(pattern.rotate(Rotation::Deg270), [[B, D], [A, C]]);
    }

    #[test]
    fn test_rotation_closure() {
        let pattern = abcd();
        let mut cells = pattern.cells();
        for _ in 0..4 {
            cells = BlockPattern::new(pattern.kind(), cells).rotate(Rotation::Deg90);
        }
        assert_eq!(cells, pattern.cells());
    }

    #[test]
    fn test_rotation_composition() {
        let pattern = abcd();
        let once = pattern.rotate(Rotation::Deg90);
        let twice = BlockPattern::new(pattern.kind(), once).rotate(Rotation::Deg90);
        let thrice = BlockPattern::new(pattern.kind(), twice).rotate(Rotation::Deg90);
        assert_eq!(twice, pattern.rotate(Rotation::Deg180));
        assert_eq!(thrice, pattern.rotate(Rotation::Deg270));
    }

    #[test]
    fn test_rotation_steps_wrap() {
        for rotation in Rotation::ALL {
            assert_eq!(rotation.rotated_right().rotated_left(), rotation);
            let mut r = rotation;
            for _ in 0..4 {
                r = r.rotated_right();
            }
            assert_eq!(r, rotation);
        }
        assert_eq!(Rotation::Deg0.rotated_left(), Rotation::Deg270);
    }

    #[test]
    fn test_degrees_roundtrip() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(360), None);
    }

    #[test]
    fn test_block_at() {
        let pattern = abcd();
        assert_eq!(pattern.block_at(0, 0, Rotation::Deg0), A);
        assert_eq!(pattern.block_at(1, 0, Rotation::Deg90), A);
        assert_eq!(pattern.block_at(2, 0, Rotation::Deg0), None);
        assert_eq!(pattern.block_at(0, 2, Rotation::Deg0), None);
    }

    #[test]
    fn test_occupied_cells_skip_absent() {
        let pattern = abcd();
        let cells: Vec<_> = pattern.occupied_cells(Rotation::Deg0).collect();
        assert_eq!(cells.len(), 3);
        assert!(!cells.iter().any(|&(dx, dy, _)| (dx, dy) == (1, 1)));

        let rotated: Vec<_> = pattern.occupied_cells(Rotation::Deg90).collect();
        assert!(!rotated.iter().any(|&(dx, dy, _)| (dx, dy) == (0, 1)));
    }

    #[test]
    fn test_from_rows_validates_shape() {
        let ok = BlockPattern::from_rows(PatternKind::Solid, &[vec![A, A], vec![A, A]]);
        assert_eq!(ok.unwrap().cells(), [[A, A], [A, A]]);

        let err = BlockPattern::from_rows(PatternKind::Solid, &[vec![A, A, A], vec![A, A]]);
        assert_eq!(
            err,
            Err(PatternShapeError {
                rows: 2,
                widths: vec![3, 2]
            })
        );
        assert!(BlockPattern::from_rows(PatternKind::Solid, &[vec![A, A]]).is_err());
        assert!(BlockPattern::from_rows(PatternKind::Solid, &[]).is_err());
    }
}
