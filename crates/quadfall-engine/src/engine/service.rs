//! Command dispatch over a [`GameRepository`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::GameNotFoundError;

use super::{
    config::GameConfig,
    game::{Game, GameId},
    pattern_generator::{PatternGenerator, PatternSource},
    repository::GameRepository,
    snapshot::GameSnapshot,
};

/// A player or clock command addressed to one game.
///
/// Deserializes from kebab-case names, e.g. `"move-left"` or `"drop-instantly"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameCommand {
    Pause,
    Resume,
    Restart,
    MoveLeft,
    MoveRight,
    RotateClockwise,
    RotateCounterClockwise,
    EnableFastFall,
    DisableFastFall,
    DropInstantly,
    Update,
}

impl GameCommand {
    pub const ALL: [Self; 11] = [
        Self::Pause,
        Self::Resume,
        Self::Restart,
        Self::MoveLeft,
        Self::MoveRight,
        Self::RotateClockwise,
        Self::RotateCounterClockwise,
        Self::EnableFastFall,
        Self::DisableFastFall,
        Self::DropInstantly,
        Self::Update,
    ];

    /// Applies the command to `game`.
    pub fn apply(self, game: &mut Game) {
        match self {
            Self::Pause => game.pause(),
            Self::Resume => game.resume(),
            Self::Restart => game.restart(),
            Self::MoveLeft => game.move_falling_block_left(),
            Self::MoveRight => game.move_falling_block_right(),
            Self::RotateClockwise => game.rotate_falling_block_clockwise(),
            Self::RotateCounterClockwise => game.rotate_falling_block_counter_clockwise(),
            Self::EnableFastFall => game.enable_fast_fall(),
            Self::DisableFastFall => game.disable_fast_fall(),
            Self::DropInstantly => game.drop_instantly(),
            Self::Update => game.update(),
        }
    }
}

/// Application-facing entry point: creates games, routes commands to them by id and
/// reads snapshots back.
///
/// # Example
///
/// ```
/// use quadfall_engine::{GameCommand, GameService, GameState, InMemoryGameRepository};
///
/// let mut service = GameService::new(InMemoryGameRepository::new());
/// let id = service.start_new_game();
///
/// service.execute(&id, GameCommand::Pause).unwrap();
/// assert_eq!(service.snapshot(&id).unwrap().state, GameState::Paused);
/// ```
#[derive(Debug)]
pub struct GameService<R> {
    repository: R,
    config: GameConfig,
}

impl<R> GameService<R>
where
    R: GameRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, GameConfig::default())
    }

    pub fn with_config(repository: R, config: GameConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates and starts a game with a random id and a randomly seeded generator.
    pub fn start_new_game(&mut self) -> GameId {
        self.start_new_game_with_source(Box::new(PatternGenerator::new()))
    }

    /// Like [`Self::start_new_game`], but drawing patterns from `source`.
    pub fn start_new_game_with_source(&mut self, source: Box<dyn PatternSource>) -> GameId {
        let game = Game::with_source(GameId::random(), self.config, source);
        self.start_game(game)
    }

    /// Starts a caller-built game and stores it, replacing any game with the same id.
    pub fn start_game(&mut self, mut game: Game) -> GameId {
        game.start();
        let id = game.id().clone();
        self.repository.save(game);
        id
    }

    pub fn find(&self, id: &GameId) -> Result<&Game, GameNotFoundError> {
        self.repository.find(id).ok_or_else(|| not_found(id))
    }

    pub fn execute(&mut self, id: &GameId, command: GameCommand) -> Result<(), GameNotFoundError> {
        let game = self.repository.find_mut(id).ok_or_else(|| not_found(id))?;
        debug!(game_id = %id, ?command, "executing command");
        command.apply(game);
        Ok(())
    }

    pub fn pause(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::Pause)
    }

    pub fn resume(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::Resume)
    }

    pub fn restart(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::Restart)
    }

    pub fn move_left(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::MoveLeft)
    }

    pub fn move_right(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::MoveRight)
    }

    pub fn rotate_clockwise(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::RotateClockwise)
    }

    pub fn rotate_counter_clockwise(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::RotateCounterClockwise)
    }

    pub fn enable_fast_fall(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::EnableFastFall)
    }

    pub fn disable_fast_fall(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::DisableFastFall)
    }

    pub fn drop_instantly(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::DropInstantly)
    }

    pub fn update(&mut self, id: &GameId) -> Result<(), GameNotFoundError> {
        self.execute(id, GameCommand::Update)
    }

    pub fn snapshot(&self, id: &GameId) -> Result<GameSnapshot, GameNotFoundError> {
        self.find(id).map(Game::snapshot)
    }

    /// Removes a game, returning it.
    pub fn end_game(&mut self, id: &GameId) -> Result<Game, GameNotFoundError> {
        self.repository.delete(id).ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &GameId) -> GameNotFoundError {
    GameNotFoundError {
        game_id: id.clone(),
    }
}
