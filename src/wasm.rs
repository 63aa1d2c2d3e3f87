//! JavaScript bindings. Each `OthelloGame` object owns one independent game.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::types::{GameState, Position};

#[wasm_bindgen]
pub struct OthelloGame {
    start: Game,
    game: Game,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `config` may be `undefined`/`null` for an 8x8 game with black first,
    /// or an object like `{ board_size: 6, first_player: "White" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self::from_config(&config)?)
    }

    #[wasm_bindgen(getter, js_name = boardSize)]
    pub fn board_size(&self) -> usize {
        self.game.board_size()
    }

    /// Current [`GameState`] as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_state())
    }

    /// Legal moves for the player to move, as `{ row, col }` objects.
    #[wasm_bindgen(js_name = validMoves)]
    pub fn valid_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.valid_moves(self.game.current_player()))
    }

    /// Plays a full turn for the current player and returns the new state.
    pub fn play(&mut self, row: usize, col: usize) -> Result<JsValue, JsError> {
        let state = self.play_at(row, col)?;
        to_js(&state)
    }

    /// Passes for a current player with no legal move and returns the new state.
    pub fn pass(&mut self) -> Result<JsValue, JsError> {
        self.game.pass()?;
        to_js(&self.game.to_game_state())
    }

    pub fn reset(&mut self) {
        self.game = self.start.clone();
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.game.status().to_string()
    }
}

impl OthelloGame {
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let start = Game::with_config(config)?;
        Ok(Self {
            game: start.clone(),
            start,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn play_at(&mut self, row: usize, col: usize) -> Result<GameState, GameError> {
        self.game.play_turn(Position::new(row, col))?;
        Ok(self.game.to_game_state())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Player};

    #[test]
    fn from_config_rejects_bad_sizes() {
        let config = GameConfig {
            board_size: 9,
            ..GameConfig::default()
        };
        assert!(matches!(
            OthelloGame::from_config(&config),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn play_at_returns_new_state_and_reset_restores_start() {
        let mut handle = OthelloGame::from_config(&GameConfig::default()).unwrap();

        let state = handle.play_at(2, 3).unwrap();
        assert_eq!(state.current_player, Player::White);
        assert_eq!(state.black_count, 4);
        assert_eq!(state.flipped, vec![Position::new(3, 3)]);
        assert_eq!(handle.status_text(), "White's turn");

        handle.reset();
        assert_eq!(handle.game(), &Game::new(8).unwrap());
        assert_eq!(handle.board_size(), 8);
    }

    #[test]
    fn play_at_propagates_rule_errors() {
        let mut handle = OthelloGame::from_config(&GameConfig::default()).unwrap();

        assert!(matches!(
            handle.play_at(0, 0),
            Err(GameError::IllegalMove { .. })
        ));
        assert!(matches!(
            handle.play_at(10, 0),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(handle.game().status(), GameStatus::BlackTurn);
        assert_eq!(
            handle.game.pass(),
            Err(GameError::PassNotAllowed(Player::Black))
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::{Array, Object, Reflect};
    use wasm_bindgen_test::*;

    fn field(value: &JsValue, key: &str) -> JsValue {
        Reflect::get(value, &JsValue::from_str(key)).unwrap()
    }

    #[wasm_bindgen_test]
    fn constructs_with_default_config() {
        let handle = OthelloGame::new(JsValue::UNDEFINED).unwrap();
        assert_eq!(handle.board_size(), 8);
        assert_eq!(handle.status_text(), "Black's turn");
    }

    #[wasm_bindgen_test]
    fn constructs_from_js_object() {
        let config = Object::new();
        Reflect::set(&config, &"board_size".into(), &JsValue::from(6)).unwrap();
        Reflect::set(&config, &"first_player".into(), &"White".into()).unwrap();

        let handle = OthelloGame::new(config.into()).unwrap();
        assert_eq!(handle.board_size(), 6);
        assert_eq!(handle.status_text(), "White's turn");
    }

    #[wasm_bindgen_test]
    fn play_returns_state_object() {
        let mut handle = OthelloGame::new(JsValue::NULL).unwrap();

        let state = handle.play(2, 3).unwrap();
        assert_eq!(field(&state, "current_player").as_string().unwrap(), "White");
        assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));

        let moves = Array::from(&handle.valid_moves().unwrap());
        assert_eq!(moves.length(), 3);
        assert!(handle.play(0, 0).is_err());
    }
}
