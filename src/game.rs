use tracing::{debug, info, instrument, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::types::{Cell, GameResult, GameState, GameStatus, Player, Position, Square, TurnOutcome};

/// A single Reversi game: the board plus whose turn it is.
///
/// `apply_move` and `toggle_player` are separate steps; callers that want
/// the whole turn protocol (move, hand over, auto-pass) use [`Game::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    last_flipped: Vec<Position>,
    last_pass: bool,
}

impl Game {
    /// Starts a game on a `board_size x board_size` board with black to move.
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        Ok(Self::from_position(Board::new(board_size)?, Player::Black))
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_position(
            Board::new(config.board_size)?,
            config.first_player,
        ))
    }

    /// Resumes play from an arbitrary position.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            last_flipped: Vec::new(),
            last_pass: false,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Disks flipped by the most recent successful move.
    pub fn last_flipped(&self) -> &[Position] {
        &self.last_flipped
    }

    /// Whether the last [`Game::play_turn`] passed over the opponent.
    pub fn last_pass(&self) -> bool {
        self.last_pass
    }

    pub fn score(&self, square: Square) -> usize {
        self.board.count(square)
    }

    /// Returns `(black, white)` disk counts.
    pub fn scores(&self) -> (usize, usize) {
        (self.score(Square::Black), self.score(Square::White))
    }

    /// Independent copy of the board. Changes to it never reach the game.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn captures_for(&self, pos: Position, player: Player) -> Vec<Position> {
        self.board.collect_flips(pos, player)
    }

    pub fn valid_moves(&self, player: Player) -> Vec<Position> {
        self.board.legal_moves(player)
    }

    pub fn is_valid_move(&self, pos: Position, player: Player) -> bool {
        !self.captures_for(pos, player).is_empty()
    }

    /// Places a disk for `player` and flips the captured disks.
    /// Illegal moves are silently ignored and return `false`.
    /// The turn does not pass to the opponent.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> bool {
        let flipped = self.board.place(pos, player);
        if flipped.is_empty() {
            trace!("move rejected");
            return false;
        }

        debug!(flipped = flipped.len(), "move applied");
        self.last_flipped = flipped;
        self.last_pass = false;
        true
    }

    pub fn toggle_player(&mut self) {
        self.current_player = !self.current_player;
    }

    /// True when the current player is stuck but the opponent can still move.
    /// When neither side can move the game is over instead, see [`Game::status`].
    pub fn should_skip_current_turn(&self) -> bool {
        !self.has_moves(self.current_player) && self.has_moves(!self.current_player)
    }

    pub fn status(&self) -> GameStatus {
        let (black, white) = self.scores();
        if black == 0 {
            return GameStatus::WhiteWins;
        }
        if white == 0 {
            return GameStatus::BlackWins;
        }

        if !self.has_moves(Player::Black) && !self.has_moves(Player::White) {
            return match black.cmp(&white) {
                std::cmp::Ordering::Greater => GameStatus::BlackWins,
                std::cmp::Ordering::Less => GameStatus::WhiteWins,
                std::cmp::Ordering::Equal => GameStatus::Tied,
            };
        }

        match self.current_player {
            Player::Black => GameStatus::BlackTurn,
            Player::White => GameStatus::WhiteTurn,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }

    /// Final result, or `None` while the game is still running.
    pub fn result(&self) -> Option<GameResult> {
        let status = self.status();
        if !status.is_terminal() {
            return None;
        }

        let (black_count, white_count) = self.scores();
        Some(GameResult {
            winner: status.winner(),
            black_count,
            white_count,
        })
    }

    /// Plays a full turn for the current player: validate, place, hand the
    /// turn over, and pass again if the opponent has no legal move.
    #[instrument(level = "debug", skip(self))]
    pub fn play_turn(&mut self, pos: Position) -> Result<TurnOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.board_size(),
            });
        }

        let player = self.current_player;
        if !self.apply_move(pos, player) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
                player,
            });
        }
        self.toggle_player();

        let skipped = if self.should_skip_current_turn() {
            let stuck = self.current_player;
            debug!(player = %stuck, "no legal move, passing");
            self.toggle_player();
            Some(stuck)
        } else {
            None
        };
        self.last_pass = skipped.is_some();

        let status = self.status();
        if status.is_terminal() {
            let (black, white) = self.scores();
            info!(%status, black, white, "game over");
        }

        Ok(TurnOutcome {
            flipped: self.last_flipped.clone(),
            skipped,
            status,
        })
    }

    /// Hands the turn to the opponent when the current player has no legal
    /// move. Needed after [`Game::from_position`] or [`Game::toggle_player`]
    /// leave a stuck player to move; [`Game::play_turn`] passes on its own.
    #[instrument(level = "debug", skip(self))]
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.should_skip_current_turn() {
            return Err(GameError::PassNotAllowed(self.current_player));
        }

        debug!(player = %self.current_player, "passing");
        self.toggle_player();
        self.last_pass = true;
        self.last_flipped.clear();
        Ok(())
    }

    /// Row-major cells for rendering, with the current player's legal moves
    /// marked `Valid`. No markers once the game is over.
    pub fn overlay(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .board
            .rows()
            .flat_map(|row| row.iter().map(|&sq| Cell::from(sq)))
            .collect();

        if !self.is_over() {
            let size = self.board_size();
            for pos in self.valid_moves(self.current_player) {
                cells[pos.row * size + pos.col] = Cell::Valid;
            }
        }

        cells
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.scores();
        let status = self.status();
        let valid_moves = if status.is_terminal() {
            Vec::new()
        } else {
            self.valid_moves(self.current_player)
        };

        GameState {
            size: self.board_size(),
            board: self.board.to_codes(),
            current_player: self.current_player,
            black_count,
            white_count,
            status,
            is_game_over: status.is_terminal(),
            valid_moves,
            is_pass: self.last_pass,
            flipped: self.last_flipped.clone(),
        }
    }

    fn has_moves(&self, player: Player) -> bool {
        self.board
            .positions()
            .any(|pos| !self.board.collect_flips(pos, player).is_empty())
    }
}
