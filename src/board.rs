use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::types::{Player, Position, Square};

pub const DEFAULT_BOARD_SIZE: usize = 8;
const MIN_BOARD_SIZE: usize = 4;
/// Scan order: N, NE, E, SE, S, SW, W, NW.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Square `size x size` Reversi board stored row-major.
///
/// Cloning a board gives a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates the initial board with the four center disks.
    /// With `mid = size / 2`, white holds the NW-SE diagonal of the center
    /// block and black the NE-SW one (d4=white, e4=black, d5=black, e5=white
    /// on 8x8).
    pub fn new(size: usize) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self::starting(size))
    }

    /// Creates a board with no disks at all.
    pub fn empty(size: usize) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    fn starting(size: usize) -> Self {
        let mut board = Self::blank(size);
        let mid = size / 2;
        board.put(Position::new(mid - 1, mid - 1), Square::White);
        board.put(Position::new(mid, mid), Square::White);
        board.put(Position::new(mid - 1, mid), Square::Black);
        board.put(Position::new(mid, mid - 1), Square::Black);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the square at `pos`, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.contains(pos).then(|| self.squares[self.index(pos)])
    }

    /// Overwrites a single square. Used to set up positions; capture rules
    /// are not applied.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        self.put(pos, square);
        Ok(())
    }

    /// Number of squares equal to `square`. Counting `Empty` gives the open squares.
    pub fn count(&self, square: Square) -> usize {
        self.squares.iter().filter(|&&sq| sq == square).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Converts the board to row-major codes where 0=empty, 1=black, 2=white.
    pub fn to_codes(&self) -> Vec<u8> {
        self.squares.iter().map(|sq| sq.code()).collect()
    }

    /// Returns the opponent disks `player` would flip by playing at `pos`,
    /// grouped by direction in scan order.
    /// Empty when `pos` is occupied, off the board, or captures nothing.
    pub fn collect_flips(&self, pos: Position, player: Player) -> Vec<Position> {
        if self.get(pos) != Some(Square::Empty) {
            return Vec::new();
        }

        let me = Square::from(player);
        let opp = Square::from(!player);
        let mut flips = Vec::new();

        for dir in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = self.step(pos, dir);

            while let Some(at) = cursor {
                if self.squares[self.index(at)] != opp {
                    break;
                }
                line.push(at);
                cursor = self.step(at, dir);
            }

            // A run only counts when an own disk closes it.
            let bounded = cursor.is_some_and(|at| self.squares[self.index(at)] == me);
            if bounded {
                flips.append(&mut line);
            }
        }

        flips
    }

    /// Returns every position where `player` has a capturing move, row-major.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        self.positions()
            .filter(|&pos| !self.collect_flips(pos, player).is_empty())
            .collect()
    }

    /// Places one disk and flips captured disks.
    /// Returns the flipped positions. Returns an empty list and leaves the
    /// board untouched when the move is illegal.
    pub fn place(&mut self, pos: Position, player: Player) -> Vec<Position> {
        let flips = self.collect_flips(pos, player);
        if flips.is_empty() {
            return flips;
        }

        let disk = Square::from(player);
        self.put(pos, disk);
        for &flipped in &flips {
            self.put(flipped, disk);
        }

        flips
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn put(&mut self, pos: Position, square: Square) {
        let idx = self.index(pos);
        self.squares[idx] = square;
    }

    fn step(&self, pos: Position, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting(DEFAULT_BOARD_SIZE)
    }
}

fn validate_size(size: usize) -> Result<(), GameError> {
    if size < MIN_BOARD_SIZE || size % 2 != 0 {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(())
}

fn glyph(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Black => 'X',
        Square::White => 'O',
    }
}

/// Renders one row per line, `X` black, `O` white, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                f.write_str("\n")?;
            }
            for (col_idx, &square) in row.iter().enumerate() {
                if col_idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", glyph(square))?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) format. Whitespace is ignored, so rows
/// may be laid out freely as long as the glyph count is a valid square size.
/// `B`/`W` and `-` are accepted as alternatives to `X`/`O` and `.`.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                '.' | '-' => Ok(Square::Empty),
                'X' | 'B' => Ok(Square::Black),
                'O' | 'W' => Ok(Square::White),
                other => Err(GameError::ParseBoard(format!("unexpected character {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = squares.len().isqrt();
        if size * size != squares.len() {
            return Err(GameError::ParseBoard(format!(
                "{} squares do not form a square board",
                squares.len()
            )));
        }
        validate_size(size).map_err(|err| GameError::ParseBoard(err.to_string()))?;

        Ok(Self { size, squares })
    }
}
