//! Game engine logic and state management.
//!
//! This module builds the gameplay on top of the [`core`](crate::core) types and the
//! [`rules`](crate::rules):
//!
//! - [`Game`] - one game's state machine (field, falling block, score, ticks)
//! - [`GameState`] - `Playing`, `Paused` or `GameOver`
//! - [`GameConfig`] - fall speeds
//! - [`GameStats`] - landing and chain statistics
//! - [`PatternGenerator`] / [`PatternSeed`] - seeded random patterns
//! - [`GameSnapshot`] - the serializable read view for renderers
//! - [`GameService`] / [`GameRepository`] - command dispatch by [`GameId`]
//! - [`Ranking`] - top-10 high scores
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] and call [`Game::start`] to spawn the first falling block
//! 2. Call [`Game::update`] once per tick; the block descends every `fall_speed` ticks
//! 3. Move and rotate the block between ticks, or drop it instantly
//! 4. When the block lands, matched rectangles are removed in chains and scored
//! 5. Repeat until a block sits in the top row

pub use self::{
    config::*, game::*, game_stats::*, pattern_generator::*, ranking::*, repository::*, score::*,
    service::*, snapshot::*, state::*,
};

mod config;
mod game;
mod game_stats;
mod pattern_generator;
mod ranking;
mod repository;
mod score;
mod service;
mod snapshot;
mod state;
