use std::{fmt, num::NonZeroU32};

use rand::Rng as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    core::{BlockPattern, Direction, FallingBlock, Field, RotationDirection},
    rules::removal,
};

use super::{
    config::GameConfig,
    game_stats::GameStats,
    pattern_generator::{PatternGenerator, PatternSource},
    score::Score,
    snapshot::GameSnapshot,
    state::GameState,
};

/// Opaque identifier of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a random 32-character hex identifier.
    #[must_use]
    pub fn random() -> Self {
        let value: u128 = rand::rng().random();
        Self(format!("{value:032x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A single game: the settled field, the active falling block and the rules that drive
/// them.
///
/// The game is advanced by [`Game::update`], one call per tick. It never reads a clock;
/// the caller decides how often to tick. Player commands (moves, rotations, fast fall and
/// instant drop) are silently ignored unless the game is [`GameState::Playing`] and a
/// falling block exists.
///
/// When a falling block can no longer descend it *lands*: its cells are fixed into the
/// field, the removal chain runs, the cleared cell count is added to the score, and the
/// game ends if any block sits in the top row. A new block spawns on the next tick.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    state: GameState,
    field: Field,
    falling_block: Option<FallingBlock>,
    next_pattern: BlockPattern,
    score: Score,
    frame_count: u64,
    fast_fall: bool,
    stats: GameStats,
    source: Box<dyn PatternSource>,
}

impl Game {
    /// Creates a game with the default config and a randomly seeded pattern generator.
    ///
    /// The game starts out [`GameState::Playing`] with an empty field and no falling
    /// block; call [`Game::start`] to spawn the first one.
    #[must_use]
    pub fn create(id: impl Into<GameId>) -> Self {
        Self::with_source(id, GameConfig::default(), Box::new(PatternGenerator::new()))
    }

    #[must_use]
    pub fn with_source(
        id: impl Into<GameId>,
        config: GameConfig,
        mut source: Box<dyn PatternSource>,
    ) -> Self {
        let next_pattern = source.next_pattern();
        Self {
            id: id.into(),
            config,
            state: GameState::Playing,
            field: Field::new(),
            falling_block: None,
            next_pattern,
            score: Score::ZERO,
            frame_count: 0,
            fast_fall: false,
            stats: GameStats::new(),
            source,
        }
    }

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Checks whether the top row of the field holds any block.
    ///
    /// This looks at the field only. A game can also be [`GameState::GameOver`] with an
    /// empty top row, after a spawn that overlapped lower cells; use [`Game::state`] for
    /// the lifecycle.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.field.has_block_in_top_row()
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Gives direct access to the settled field, for scripted setups.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[must_use]
    pub fn falling_block(&self) -> Option<&FallingBlock> {
        self.falling_block.as_ref()
    }

    #[must_use]
    pub fn next_pattern(&self) -> &BlockPattern {
        &self.next_pattern
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the tick divisor currently used for automatic descent.
    #[must_use]
    pub fn fall_speed(&self) -> NonZeroU32 {
        if self.fast_fall {
            self.config.fast_fall_speed
        } else {
            self.config.normal_fall_speed
        }
    }

    #[must_use]
    pub fn is_fast_falling(&self) -> bool {
        self.fast_fall
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_game(self)
    }

    /// Spawns the first falling block.
    ///
    /// Does nothing unless the game is playing without a falling block.
    pub fn start(&mut self) {
        if !self.state.is_playing() || self.falling_block.is_some() {
            return;
        }
        info!(game_id = %self.id, "game started");
        self.spawn_falling_block();
    }

    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.state = GameState::Paused;
            info!(game_id = %self.id, "game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.state.is_paused() {
            self.state = GameState::Playing;
            info!(game_id = %self.id, "game resumed");
        }
    }

    /// Resets the game to a fresh start, from any state.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn restart(&mut self) {
        self.field.clear();
        self.falling_block = None;
        self.next_pattern = self.source.next_pattern();
        self.score = Score::ZERO;
        self.frame_count = 0;
        self.fast_fall = false;
        self.stats = GameStats::new();
        self.state = GameState::Playing;
        self.start();
    }

    /// Advances the game by one tick.
    ///
    /// Spawns a falling block if there is none, then moves it down (or lands it) on every
    /// tick whose frame count is a multiple of [`Game::fall_speed`].
    pub fn update(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.frame_count += 1;

        if self.falling_block.is_none() {
            self.spawn_falling_block();
            if !self.state.is_playing() {
                return;
            }
        }

        if self.frame_count % u64::from(self.fall_speed().get()) != 0 {
            return;
        }
        let Some(falling) = self.falling_block.as_mut() else {
            return;
        };
        if falling.can_move(Direction::Down, &self.field) {
            falling.move_down();
            return;
        }
        self.land_block();
    }

    pub fn move_falling_block_left(&mut self) {
        self.try_move(Direction::Left);
    }

    pub fn move_falling_block_right(&mut self) {
        self.try_move(Direction::Right);
    }

    pub fn rotate_falling_block_clockwise(&mut self) {
        self.try_rotate(RotationDirection::Clockwise);
    }

    pub fn rotate_falling_block_counter_clockwise(&mut self) {
        self.try_rotate(RotationDirection::CounterClockwise);
    }

    pub fn enable_fast_fall(&mut self) {
        self.fast_fall = true;
    }

    pub fn disable_fast_fall(&mut self) {
        self.fast_fall = false;
    }

    /// Moves the falling block down as far as it goes and lands it immediately,
    /// regardless of the tick timing.
    pub fn drop_instantly(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let Some(falling) = self.falling_block.as_mut() else {
            return;
        };
        while falling.can_move(Direction::Down, &self.field) {
            falling.move_down();
        }
        self.land_block();
    }

    fn try_move(&mut self, direction: Direction) {
        if !self.state.is_playing() {
            return;
        }
        let Some(falling) = self.falling_block.as_mut() else {
            return;
        };
        if !falling.can_move(direction, &self.field) {
            return;
        }
        match direction {
            Direction::Left => falling.move_left(),
            Direction::Right => falling.move_right(),
            Direction::Down => falling.move_down(),
        }
    }

    fn try_rotate(&mut self, direction: RotationDirection) {
        if !self.state.is_playing() {
            return;
        }
        let Some(falling) = self.falling_block.as_mut() else {
            return;
        };
        if !falling.can_rotate(direction, &self.field) {
            return;
        }
        match direction {
            RotationDirection::Clockwise => falling.rotate_clockwise(),
            RotationDirection::CounterClockwise => falling.rotate_counter_clockwise(),
        }
    }

    /// Turns the next pattern into the falling block and draws a new next pattern.
    ///
    /// The game ends right away if the new block overlaps settled cells.
    fn spawn_falling_block(&mut self) {
        let pattern = std::mem::replace(&mut self.next_pattern, self.source.next_pattern());
        let falling = FallingBlock::new(pattern);
        let fits = falling.fits(&self.field);
        self.falling_block = Some(falling);
        trace!(game_id = %self.id, kind = ?pattern.kind(), fits, "spawned falling block");

        if !fits {
            self.end_game();
        }
    }

    /// Fixes the falling block into the field and runs the removal chain.
    ///
    /// If the block overlaps settled cells (the field was edited under it), nothing is
    /// placed and the game ends with the block left in place.
    fn land_block(&mut self) {
        let Some(falling) = self.falling_block.take() else {
            return;
        };
        if let Err(error) = self.field.place_blocks(&falling.blocks()) {
            warn!(game_id = %self.id, %error, "falling block cannot land");
            self.falling_block = Some(falling);
            self.end_game();
            return;
        }

        let outcome = removal::run_removal_chain(&mut self.field);
        self.score = self.score.add(outcome.cleared_cells as u64);
        self.stats.record_landing(outcome);
        debug!(
            game_id = %self.id,
            position = %falling.position(),
            cleared = outcome.cleared_cells,
            chains = outcome.chains,
            score = %self.score,
            "falling block landed"
        );

        if self.field.has_block_in_top_row() {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.state = GameState::GameOver;
        info!(
            game_id = %self.id,
            score = %self.score,
            landed_blocks = self.stats.landed_blocks(),
            "game over"
        );
    }
}
