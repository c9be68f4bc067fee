//! Read-only views of a game for renderers and clients.

use serde::Serialize;

use crate::core::{
    Block, Color, FIELD_HEIGHT, FIELD_WIDTH, FallingBlock, PATTERN_SIZE, PatternCells, Position,
};

use super::{
    game::{Game, GameId},
    score::Score,
    state::GameState,
};

/// One cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellView {
    Blue,
    Red,
    Yellow,
    Empty,
}

impl From<Option<Block>> for CellView {
    fn from(cell: Option<Block>) -> Self {
        match cell.map(Block::color) {
            Some(Color::Blue) => Self::Blue,
            Some(Color::Red) => Self::Red,
            Some(Color::Yellow) => Self::Yellow,
            None => Self::Empty,
        }
    }
}

pub type PatternView = [[CellView; PATTERN_SIZE]; PATTERN_SIZE];
pub type FieldView = [[CellView; FIELD_WIDTH]; FIELD_HEIGHT];

fn pattern_view(cells: &PatternCells) -> PatternView {
    cells.map(|row| row.map(CellView::from))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallingBlockSnapshot {
    /// Cells with the rotation already applied.
    pub pattern: PatternView,
    pub position: Position,
    /// Clockwise rotation in degrees.
    pub rotation: u16,
}

impl From<&FallingBlock> for FallingBlockSnapshot {
    fn from(falling: &FallingBlock) -> Self {
        Self {
            pattern: pattern_view(&falling.cells()),
            position: falling.position(),
            rotation: falling.rotation().degrees(),
        }
    }
}

/// Everything a renderer needs to draw one frame.
///
/// Serialized with camelCase keys:
///
/// ```
/// use quadfall_engine::Game;
///
/// let mut game = Game::create("demo");
/// game.start();
///
/// let json = serde_json::to_value(game.snapshot()).unwrap();
/// assert_eq!(json["gameId"], "demo");
/// assert_eq!(json["state"], "playing");
/// assert_eq!(json["field"].as_array().unwrap().len(), 20);
/// assert_eq!(json["fallingBlock"]["position"]["x"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub state: GameState,
    pub score: Score,
    pub field: FieldView,
    pub falling_block: Option<FallingBlockSnapshot>,
    pub next_pattern: PatternView,
}

impl GameSnapshot {
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            game_id: game.id().clone(),
            state: game.state(),
            score: game.score(),
            field: game.field().grid().map(|row| row.map(CellView::from)),
            falling_block: game.falling_block().map(FallingBlockSnapshot::from),
            next_pattern: pattern_view(&game.next_pattern().cells()),
        }
    }
}
