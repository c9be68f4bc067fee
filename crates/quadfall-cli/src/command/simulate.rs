use std::{num::NonZeroU32, path::PathBuf};

use quadfall_engine::{
    Game, GameCommand, GameConfig, GameService, GameSnapshot, GameStats, InMemoryGameRepository,
    InMemoryRankingRepository, PatternGenerator, PatternSeed, Ranking, RankingEntry,
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;
use tracing::{debug, info};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Seed for the whole run as 32 hex digits (random if omitted)
    #[arg(long)]
    seed: Option<PatternSeed>,
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,
    /// Maximum number of ticks per game
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Game config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ticks per row while fast fall is off (overrides the config file)
    #[arg(long)]
    normal_fall_speed: Option<NonZeroU32>,
    /// Ticks per row while fast fall is on (overrides the config file)
    #[arg(long)]
    fast_fall_speed: Option<NonZeroU32>,
    /// Ranking JSON file to read and update
    #[arg(long)]
    ranking: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    seed: PatternSeed,
    config: GameConfig,
    games: Vec<GameReport>,
    ranking: Vec<RankingEntry>,
}

#[derive(Debug, Serialize)]
struct GameReport {
    seed: PatternSeed,
    ticks: u64,
    game_over: bool,
    top_score: bool,
    stats: GameStats,
    snapshot: GameSnapshot,
}

/// Picks random commands, most ticks doing nothing.
#[derive(Debug)]
struct AutoPlayer {
    rng: Pcg32,
}

impl AutoPlayer {
    fn new(rng: Pcg32) -> Self {
        Self { rng }
    }

    fn choose_command(&mut self) -> Option<GameCommand> {
        let command = match self.rng.random_range(0..100) {
            0..8 => GameCommand::MoveLeft,
            8..16 => GameCommand::MoveRight,
            16..22 => GameCommand::RotateClockwise,
            22..26 => GameCommand::RotateCounterClockwise,
            26..28 => GameCommand::EnableFastFall,
            28..30 => GameCommand::DisableFastFall,
            30..32 => GameCommand::DropInstantly,
            _ => return None,
        };
        Some(command)
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let config = load_config(arg)?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    info!(%seed, games = arg.games, max_ticks = arg.max_ticks, "starting simulation");

    let saved_entries = match &arg.ranking {
        Some(path) => util::read_ranking_file(path)?,
        None => Vec::new(),
    };
    let mut ranking = Ranking::new(InMemoryRankingRepository::with_entries(saved_entries));
    let mut service = GameService::with_config(InMemoryGameRepository::new(), config);
    let mut rng = Pcg32::from_seed(seed.to_bytes());

    let mut games = Vec::with_capacity(arg.games);
    for index in 0..arg.games {
        let game_seed: PatternSeed = rng.random();
        let mut player = AutoPlayer::new(Pcg32::from_rng(&mut rng));
        let (game, ticks) = play_game(&mut service, game_seed, &mut player, arg.max_ticks)?;

        let score = game.score();
        let top_score = ranking.is_top_score(score);
        ranking.add_score(score);
        info!(
            game = index,
            %score,
            ticks,
            landed_blocks = game.stats().landed_blocks(),
            longest_chain = game.stats().longest_chain(),
            top_score,
            "game finished"
        );

        games.push(GameReport {
            seed: game_seed,
            ticks,
            game_over: game.state().is_game_over(),
            top_score,
            stats: game.stats().clone(),
            snapshot: game.snapshot(),
        });
    }

    if let Some(path) = &arg.ranking {
        util::write_json(&ranking.entries(), Some(path.as_path()))?;
        debug!(path = %path.display(), "saved ranking");
    }

    let report = SimulationReport {
        seed,
        config,
        games,
        ranking: ranking.entries(),
    };
    util::write_json(&report, arg.output.as_deref())?;
    Ok(())
}

fn load_config(arg: &SimulateArg) -> anyhow::Result<GameConfig> {
    let mut config = match &arg.config {
        Some(path) => util::read_config_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = arg.normal_fall_speed {
        config.normal_fall_speed = speed;
    }
    if let Some(speed) = arg.fast_fall_speed {
        config.fast_fall_speed = speed;
    }
    Ok(config)
}

/// Plays one game to game over or `max_ticks`, then removes it from the service.
fn play_game(
    service: &mut GameService<InMemoryGameRepository>,
    seed: PatternSeed,
    player: &mut AutoPlayer,
    max_ticks: u64,
) -> anyhow::Result<(Game, u64)> {
    let id = service.start_new_game_with_source(Box::new(PatternGenerator::with_seed(seed)));
    let mut ticks = 0;
    while ticks < max_ticks && !service.find(&id)?.state().is_game_over() {
        if let Some(command) = player.choose_command() {
            service.execute(&id, command)?;
        }
        service.update(&id)?;
        ticks += 1;
    }
    let game = service.end_game(&id)?;
    Ok((game, ticks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(seed: PatternSeed, max_ticks: u64) -> (Game, u64) {
        let mut service = GameService::new(InMemoryGameRepository::new());
        let mut player = AutoPlayer::new(Pcg32::from_seed(seed.to_bytes()));
        play_game(&mut service, seed, &mut player, max_ticks).unwrap()
    }

    #[test]
    fn test_play_game_is_deterministic() {
        let seed = PatternSeed::from_bytes([42; 16]);
        let (first, first_ticks) = play(seed, 5_000);
        let (second, second_ticks) = play(seed, 5_000);
        assert_eq!(first_ticks, second_ticks);
        assert_eq!(first.score(), second.score());
        assert_eq!(first.field(), second.field());
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn test_play_game_respects_tick_limit() {
        let (game, ticks) = play(PatternSeed::from_bytes([1; 16]), 10);
        assert_eq!(ticks, 10);
        assert_eq!(game.frame_count(), 10);
    }

    #[test]
    fn test_play_game_removes_finished_game() {
        let mut service = GameService::new(InMemoryGameRepository::new());
        let seed = PatternSeed::from_bytes([9; 16]);
        let mut player = AutoPlayer::new(Pcg32::from_seed(seed.to_bytes()));
        let (game, _) = play_game(&mut service, seed, &mut player, 100).unwrap();
        assert!(service.find(game.id()).is_err());
    }
}
