use crate::types::Player;

/// Errors surfaced by the engine's fallible entry points.
///
/// Rule queries (`captures_for`, `valid_moves`, `apply_move`) never fail;
/// they answer with an empty list or `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size must be an even number >= 4, got {0}")]
    InvalidBoardSize(usize),

    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move for {player} at ({row}, {col})")]
    IllegalMove {
        row: usize,
        col: usize,
        player: Player,
    },

    #[error("game is already over")]
    GameOver,

    #[error("{0} has a legal move and cannot pass")]
    PassNotAllowed(Player),

    #[error("cannot parse board: {0}")]
    ParseBoard(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
