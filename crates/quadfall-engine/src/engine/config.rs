use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::GameConfigError;

/// Tunable timing of a game.
///
/// Fall speeds are tick divisors: the falling block descends on every tick whose
/// frame count is a multiple of the active speed, so a smaller value falls faster.
///
/// Missing fields fall back to the defaults when deserializing:
///
/// ```
/// use quadfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "fast_fall_speed": 3 }"#).unwrap();
/// assert_eq!(config.normal_fall_speed.get(), 30);
/// assert_eq!(config.fast_fall_speed.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticks per row while fast fall is off.
    pub normal_fall_speed: NonZeroU32,
    /// Ticks per row while fast fall is on.
    pub fast_fall_speed: NonZeroU32,
}

impl GameConfig {
    pub const DEFAULT_NORMAL_FALL_SPEED: u32 = 30;
    pub const DEFAULT_FAST_FALL_SPEED: u32 = 5;

    /// Builds a config from raw tick counts, rejecting zero.
    pub fn new(normal_fall_speed: u32, fast_fall_speed: u32) -> Result<Self, GameConfigError> {
        Ok(Self {
            normal_fall_speed: NonZeroU32::new(normal_fall_speed).ok_or(GameConfigError {
                name: "normal_fall_speed",
            })?,
            fast_fall_speed: NonZeroU32::new(fast_fall_speed).ok_or(GameConfigError {
                name: "fast_fall_speed",
            })?,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            normal_fall_speed: NonZeroU32::new(Self::DEFAULT_NORMAL_FALL_SPEED)
                .unwrap_or(NonZeroU32::MIN),
            fast_fall_speed: NonZeroU32::new(Self::DEFAULT_FAST_FALL_SPEED)
                .unwrap_or(NonZeroU32::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speeds() {
        let config = GameConfig::default();
        assert_eq!(config.normal_fall_speed.get(), 30);
        assert_eq!(config.fast_fall_speed.get(), 5);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            GameConfig::new(0, 5),
            Err(GameConfigError {
                name: "normal_fall_speed"
            })
        );
        assert_eq!(
            GameConfig::new(30, 0),
            Err(GameConfigError {
                name: "fast_fall_speed"
            })
        );
        assert!(GameConfig::new(1, 1).is_ok());
    }

    #[test]
    fn test_zero_in_json_is_rejected() {
        assert!(serde_json::from_str::<GameConfig>(r#"{ "normal_fall_speed": 0 }"#).is_err());
    }
}
