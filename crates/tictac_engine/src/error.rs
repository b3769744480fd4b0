//! Error types for board construction, moves, and parsing.

use super::types::{Player, Position};
use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveReason {
    /// The coordinate lies outside the grid.
    #[display("position is outside the board")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("square is already occupied")]
    Occupied,
}

/// Error that can occur when creating a board or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The requested grid dimension is not positive.
    #[display("Invalid board size {size}: must be at least 1")]
    InvalidSize {
        /// Requested dimension.
        size: usize,
    },

    /// The target cell is out of bounds or already occupied.
    #[display("Illegal move at {position}: {reason}")]
    IllegalMove {
        /// Requested coordinate.
        position: Position,
        /// What made the move illegal.
        reason: IllegalMoveReason,
    },
}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input contained no rows.
    #[display("Board text is empty")]
    Empty,

    /// A row's length differs from the number of rows.
    #[display("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Cells required (the number of rows).
        expected: usize,
    },

    /// A cell character is not a mark or an empty marker.
    #[display("Unknown symbol {symbol:?} at ({column}, {row})")]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// Zero-based column.
        column: usize,
        /// Zero-based row.
        row: usize,
    },

    /// Mark counts cannot arise from alternating turns with X first.
    #[display("Impossible mark counts: {x_count} X and {o_count} O")]
    TurnOrder {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },

    /// The side to move already holds a completed line, which no game reaches.
    #[display("Unreachable position: {player} to move but already holds the line from {start}")]
    Unreachable {
        /// The side to move.
        player: Player,
        /// First cell of the completed line.
        start: Position,
    },
}
