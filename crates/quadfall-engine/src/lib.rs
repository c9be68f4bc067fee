//! Falling-block puzzle engine.
//!
//! 2×2 pieces drop onto an 8×20 [`Field`]. Whenever same-colored settled cells form an
//! axis-aligned rectangle of at least 2×2, the rectangle is removed, gravity compacts the
//! columns, and the check repeats until the field is stable (a *chain*).
//!
//! - [`core`] - value types and geometry (positions, patterns, the field, the falling block)
//! - [`rules`] - rectangle matching, gravity and the removal chain
//! - [`engine`] - the [`Game`] state machine, pattern generation, snapshots and the
//!   command service
//!
//! # Example
//!
//! ```
//! use quadfall_engine::{Game, GameState};
//!
//! let mut game = Game::create("example");
//! game.start();
//! assert_eq!(game.state(), GameState::Playing);
//!
//! game.move_falling_block_left();
//! game.drop_instantly();
//! assert!(game.falling_block().is_none());
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
pub mod rules;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position coordinates must be non-negative, got ({x}, {y})")]
pub struct PositionError {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("block pattern must be 2x2, got {rows} rows with widths {widths:?}")]
pub struct PatternShapeError {
    pub rows: usize,
    pub widths: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("rectangle width and height must be positive, got {width}x{height}")]
pub struct RectangleError {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("score must be non-negative, got {value}")]
pub struct ScoreError {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FieldError {
    #[display("position {position} is outside the field")]
    OutOfBounds { position: Position },
    #[display("position {position} is already occupied")]
    Occupied { position: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: {message}")]
pub struct PatternSeedError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("fall speed must be a positive number of frames ({name})")]
pub struct GameConfigError {
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("game not found: {game_id}")]
pub struct GameNotFoundError {
    pub game_id: GameId,
}
