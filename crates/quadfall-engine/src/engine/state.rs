use serde::{Deserialize, Serialize};

/// Lifecycle phase of a game.
///
/// `GameOver` is terminal until the game is restarted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&GameState::Playing).unwrap(),
            "\"playing\""
        );
        assert_eq!(
            serde_json::to_string(&GameState::Paused).unwrap(),
            "\"paused\""
        );
        assert_eq!(
            serde_json::to_string(&GameState::GameOver).unwrap(),
            "\"gameOver\""
        );
    }
}
