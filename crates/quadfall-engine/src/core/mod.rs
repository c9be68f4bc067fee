//! Value types and geometry shared by the rules and the game engine.
//!
//! - [`Position`] - a non-negative cell coordinate
//! - [`Color`] / [`Block`] - a colored unit cell
//! - [`BlockPattern`] - the 2×2 template a falling piece is built from
//! - [`Rectangle`] - an axis-aligned region produced by matching
//! - [`Field`] - the 8×20 board of settled blocks
//! - [`FallingBlock`] - the active, player-controlled piece
//!
//! Collision checks used by the falling block live in [`collision`].

pub use self::{block::*, falling_block::*, field::*, pattern::*, position::*, rectangle::*};

pub(crate) mod block;
pub mod collision;
pub(crate) mod falling_block;
pub(crate) mod field;
pub(crate) mod pattern;
pub(crate) mod position;
pub(crate) mod rectangle;

/// Number of columns in the field.
pub const FIELD_WIDTH: usize = 8;
/// Number of rows in the field.
pub const FIELD_HEIGHT: usize = 20;
