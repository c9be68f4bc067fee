//! Field rules applied after a block lands.
//!
//! - [`matching`] - finds same-color rectangles of at least 2×2
//! - [`gravity`] - drops unsupported blocks down their columns
//! - [`removal`] - repeats match → remove → gravity until the field is stable
//!
//! All functions are stateless; the only state they touch is the [`Field`](crate::Field)
//! passed in.

pub mod gravity;
pub mod matching;
pub mod removal;
