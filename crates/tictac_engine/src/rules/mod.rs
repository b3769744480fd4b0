//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; rules are kept separate from board
//! storage so the search can evaluate positions without owning any state.

pub mod draw;
pub mod win;

pub use draw::is_tied;
pub use win::{Line, is_won};

use super::{Board, Player, Position};
use serde::Serialize;

/// Classification of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Moves remain and nobody has won.
    #[display("in progress")]
    InProgress,
    /// A line was completed.
    #[display("{winner} wins")]
    Won {
        /// The player who completed the line.
        winner: Player,
        /// Cells of the winning line.
        line: Vec<Position>,
    },
    /// Board full with no completed line.
    #[display("tie")]
    Tied,
}

impl Outcome {
    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Classifies a position. Wins take precedence over ties.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(line) = is_won(board) {
        Outcome::Won {
            winner: board.to_move().opponent(),
            line,
        }
    } else if board.is_full() {
        Outcome::Tied
    } else {
        Outcome::InProgress
    }
}

impl Board {
    /// See [`is_won`].
    pub fn is_won(&self) -> Option<Vec<Position>> {
        is_won(self)
    }

    /// See [`is_tied`].
    pub fn is_tied(&self) -> bool {
        is_tied(self)
    }

    /// See [`outcome`].
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}
