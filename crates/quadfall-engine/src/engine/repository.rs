use std::collections::HashMap;

use super::game::{Game, GameId};

/// Storage for games, keyed by [`GameId`].
pub trait GameRepository {
    /// Stores `game`, replacing any game with the same id.
    fn save(&mut self, game: Game);

    fn find(&self, id: &GameId) -> Option<&Game>;

    fn find_mut(&mut self, id: &GameId) -> Option<&mut Game>;

    /// Removes and returns the game, if present.
    fn delete(&mut self, id: &GameId) -> Option<Game>;
}

/// A [`GameRepository`] that keeps games in memory.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: HashMap<GameId, Game>,
}

impl InMemoryGameRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&mut self, game: Game) {
        self.games.insert(game.id().clone(), game);
    }

    fn find(&self, id: &GameId) -> Option<&Game> {
        self.games.get(id)
    }

    fn find_mut(&mut self, id: &GameId) -> Option<&mut Game> {
        self.games.get_mut(id)
    }

    fn delete(&mut self, id: &GameId) -> Option<Game> {
        self.games.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_upserts_by_id() {
        let mut repository = InMemoryGameRepository::new();
        repository.save(Game::create("a"));
        repository.save(Game::create("b"));

        let mut replacement = Game::create("a");
        replacement.start();
        repository.save(replacement);

        assert_eq!(repository.len(), 2);
        let stored = repository.find(&GameId::from("a")).unwrap();
        assert!(stored.falling_block().is_some());
    }

    #[test]
    fn test_find_mut_and_delete() {
        let mut repository = InMemoryGameRepository::new();
        repository.save(Game::create("a"));
        let id = GameId::from("a");

        repository.find_mut(&id).unwrap().pause();
        assert!(repository.find(&id).unwrap().state().is_paused());

        assert!(repository.delete(&id).is_some());
        assert!(repository.find(&id).is_none());
        assert!(repository.delete(&id).is_none());
        assert!(repository.is_empty());
    }
}
