//! Immutable square game board.
//!
//! A [`Board`] is a value: applying a move returns a new board and leaves
//! the original untouched, so recursive search never needs undo bookkeeping.

use super::error::{BoardError, IllegalMoveReason, ParseBoardError};
use super::rules::win::completed_line;
use super::types::{Player, Position, Square};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// A `size × size` grid of squares together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Width and height of the grid.
    size: usize,
    /// Squares in row-major order (`y * size + x`).
    cells: Vec<Square>,
    /// Side whose mark the next move places.
    to_move: Player,
}

impl Board {
    /// Standard tic-tac-toe dimension.
    pub const STANDARD_SIZE: usize = 3;

    /// Creates an empty board with `X` to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero or the grid
    /// would not fit in memory.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let area = size
            .checked_mul(size)
            .filter(|_| size >= 1)
            .ok_or(BoardError::InvalidSize { size })?;
        Ok(Self {
            size,
            cells: vec![Square::Empty; area],
            to_move: Player::X,
        })
    }

    /// Creates an empty standard 3×3 board.
    pub fn standard() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            cells: vec![Square::Empty; Self::STANDARD_SIZE * Self::STANDARD_SIZE],
            to_move: Player::X,
        }
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Gets the square at a position, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// All coordinates, ascending `y` then ascending `x`.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Empty coordinates in the same order as [`Board::positions`].
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self.is_empty(pos))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| *s != Square::Empty)
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Places the mover's mark at `(x, y)` and returns the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the coordinate is off the grid
    /// or the square is occupied. `self` is unchanged either way.
    #[instrument(level = "trace", skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&self, x: usize, y: usize) -> Result<Board, BoardError> {
        let position = Position::new(x, y);
        match self.get(position) {
            None => Err(BoardError::IllegalMove {
                position,
                reason: IllegalMoveReason::OutOfBounds,
            }),
            Some(Square::Occupied(_)) => Err(BoardError::IllegalMove {
                position,
                reason: IllegalMoveReason::Occupied,
            }),
            Some(Square::Empty) => Ok(self.with_move(position)),
        }
    }

    /// Applies a move already known to target an empty on-board square.
    pub(crate) fn with_move(&self, pos: Position) -> Board {
        let mut next = self.clone();
        next.cells[pos.y * self.size + pos.x] = Square::Occupied(self.to_move);
        next.to_move = self.to_move.opponent();
        next
    }

    /// Formats the board as rows of space-separated symbols.
    ///
    /// `X` and `O` for marks, `.` for empty squares, rows joined by newlines.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|s| s.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.size + pos.x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the [`Board::render`] format.
    ///
    /// Rows are separated by newlines or `/`; whitespace between cells is
    /// optional; `.`, `-` and `_` mark empty squares. The side to move is
    /// inferred from the mark counts.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .split(['\n', '/'])
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != size {
                return Err(ParseBoardError::NotSquare {
                    row,
                    len: symbols.len(),
                    expected: size,
                });
            }
            for (column, &symbol) in symbols.iter().enumerate() {
                let square = match symbol {
                    'X' | 'x' => Square::Occupied(Player::X),
                    'O' | 'o' => Square::Occupied(Player::O),
                    '.' | '-' | '_' => Square::Empty,
                    _ => {
                        return Err(ParseBoardError::UnknownSymbol {
                            symbol,
                            column,
                            row,
                        });
                    }
                };
                cells.push(square);
            }
        }

        let mut board = Self {
            size,
            cells,
            to_move: Player::X,
        };
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        board.to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(ParseBoardError::TurnOrder { x_count, o_count });
        };

        // The game stops as soon as a line is completed, so the side to
        // move can never already hold one.
        if let Some(line) = completed_line(&board, board.to_move) {
            return Err(ParseBoardError::Unreachable {
                player: board.to_move,
                start: line[0],
            });
        }

        debug!(size, x_count, o_count, to_move = %board.to_move, "Parsed board");
        Ok(board)
    }
}
