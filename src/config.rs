use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::GameError;
use crate::types::Player;

/// Settings for a new game, deserializable from JSON or a JS object.
/// Missing fields fall back to [`GameConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::Black,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size < 4 {
            return Err(GameError::InvalidConfig(format!(
                "board_size must be >= 4, got {}",
                self.board_size
            )));
        }
        if self.board_size % 2 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "board_size must be even, got {}",
                self.board_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.first_player, Player::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"board_size": 6}"#).unwrap();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.first_player, Player::Black);

        let config: GameConfig = serde_json::from_str(r#"{"first_player": "White"}"#).unwrap();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.first_player, Player::White);
    }

    #[test]
    fn validate_rejects_odd_and_small_sizes() {
        let odd = GameConfig {
            board_size: 7,
            ..GameConfig::default()
        };
        assert_eq!(
            odd.validate(),
            Err(GameError::InvalidConfig("board_size must be even, got 7".into()))
        );

        let small = GameConfig {
            board_size: 2,
            ..GameConfig::default()
        };
        assert!(matches!(small.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn player_names_are_case_sensitive() {
        let result = serde_json::from_str::<GameConfig>(r#"{"first_player": "white"}"#);
        assert!(result.is_err());
    }
}
