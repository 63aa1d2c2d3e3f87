use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Square {
    #[default]
    Empty,
    Black,
    White,
}

impl Square {
    /// Wire code used in [`GameState::board`]: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Black => 1,
            Square::White => 2,
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Square::Black,
            Player::White => Square::White,
        }
    }
}

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// What the UI should draw in a square.
///
/// `Valid` is a highlight for the current player's legal moves. It is computed
/// on demand and never stored in a [`crate::board::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
    Valid,
}

impl From<Square> for Cell {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => Cell::Empty,
            Square::Black => Cell::Black,
            Square::White => Cell::White,
        }
    }
}

/// Derived classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    BlackTurn,
    WhiteTurn,
    BlackWins,
    WhiteWins,
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::BlackTurn | GameStatus::WhiteTurn)
    }

    /// The winning side, or `None` while in progress or on a tie.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::BlackWins => Some(Player::Black),
            GameStatus::WhiteWins => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::BlackTurn => "Black's turn",
            GameStatus::WhiteTurn => "White's turn",
            GameStatus::BlackWins => "Black wins",
            GameStatus::WhiteWins => "White wins",
            GameStatus::Tied => "Tie game",
        };
        f.write_str(text)
    }
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub size: usize,
    /// Row-major square codes, see [`Square::code`].
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: usize,
    pub white_count: usize,
    pub status: GameStatus,
    pub is_game_over: bool,
    /// Legal moves for `current_player`; empty once the game is over.
    pub valid_moves: Vec<Position>,
    /// Contract:
    /// - `true` when the last turn played forced the opponent to pass.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Disks flipped by the most recent move.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub black_count: usize,
    pub white_count: usize,
}

/// What happened during one call to [`crate::game::Game::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub flipped: Vec<Position>,
    /// The player who had no legal move and was passed over, if any.
    pub skipped: Option<Player>,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_swaps_players() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
    }

    #[test]
    fn square_codes_match_wire_contract() {
        assert_eq!(Square::Empty.code(), 0);
        assert_eq!(Square::Black.code(), 1);
        assert_eq!(Square::White.code(), 2);
    }

    #[test]
    fn status_text_and_winner() {
        assert_eq!(GameStatus::BlackTurn.to_string(), "Black's turn");
        assert_eq!(GameStatus::Tied.to_string(), "Tie game");
        assert_eq!(GameStatus::WhiteWins.winner(), Some(Player::White));
        assert_eq!(GameStatus::Tied.winner(), None);
        assert!(GameStatus::Tied.is_terminal());
        assert!(!GameStatus::WhiteTurn.is_terminal());
    }

    #[test]
    fn enums_serialize_as_variant_names() {
        assert_eq!(serde_json::to_value(Player::White).unwrap(), serde_json::json!("White"));
        assert_eq!(
            serde_json::to_value(GameStatus::BlackWins).unwrap(),
            serde_json::json!("BlackWins")
        );
        assert_eq!(serde_json::to_value(Cell::Valid).unwrap(), serde_json::json!("Valid"));
        assert_eq!(serde_json::to_value(Square::Empty).unwrap(), serde_json::json!("Empty"));
    }
}
