//! Tic-tac-toe game logic with a perfect-play opponent.
//!
//! - [`Board`]: immutable position; moves produce new boards.
//! - [`rules`]: win and tie detection.
//! - [`search`]: exhaustive minimax returning provably optimal moves.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Board, best_move};
//!
//! let board = Board::new(3)?.apply_move(1, 1)?;
//! let reply = best_move(&board).expect("game is not over");
//! let board = board.apply_move(reply.x, reply.y)?;
//! assert!(board.is_won().is_none());
//! # Ok::<(), tictac_engine::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
pub mod search;
mod types;

pub use board::Board;
pub use error::{BoardError, IllegalMoveReason, ParseBoardError};
pub use rules::{Outcome, is_tied, is_won, outcome};
pub use search::{best_move, evaluate};
pub use types::{Player, Position, Square};
