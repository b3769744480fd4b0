//! Printed output for position analysis and self-play.

use crate::session::{MAX_SEARCH_SIZE, SessionError, play_out};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tictac_engine::{Board, Outcome, Player, Position, best_move};
use tracing::{debug, instrument};

/// Analysis of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Side whose move it is.
    pub to_move: Player,
    /// Classification of the position.
    pub outcome: Outcome,
    /// Optimal move, or `None` once the game is over.
    pub best_move: Option<Position>,
}

impl BestMoveReport {
    /// Searches `board` for the best move.
    ///
    /// # Errors
    ///
    /// [`SessionError::SearchTooLarge`] for boards above [`MAX_SEARCH_SIZE`].
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn analyze(board: &Board) -> Result<Self, SessionError> {
        if board.size() > MAX_SEARCH_SIZE {
            return Err(SessionError::SearchTooLarge {
                size: board.size(),
                max: MAX_SEARCH_SIZE,
            });
        }
        let report = Self {
            to_move: board.to_move(),
            outcome: board.outcome(),
            best_move: best_move(board),
        };
        debug!(best_move = ?report.best_move, "Position analyzed");
        Ok(report)
    }
}

/// Writes the board and its best move, or the report as pretty JSON.
pub fn write_best<W: Write>(board: &Board, json: bool, mut output: W) -> Result<BestMoveReport> {
    let report = BestMoveReport::analyze(board)?;
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(output, "{}", board)?;
        match report.best_move {
            Some(pos) => writeln!(output, "{} to move, best move {}", report.to_move, pos)?,
            None => writeln!(output, "No move: {}", report.outcome)?,
        }
    }
    Ok(report)
}

/// Plays both sides from an empty `size × size` board, writing every position.
///
/// Returns the final outcome.
#[instrument(skip(output))]
pub fn write_self_play<W: Write>(size: usize, mut output: W) -> Result<Outcome> {
    let start = Board::new(size)?;
    let (moves, _) = play_out(&start)?;

    let mut board = start;
    for pos in moves {
        let mover = board.to_move();
        board = board.apply_move(pos.x, pos.y)?;
        writeln!(output, "{} plays {}", mover, pos)?;
        writeln!(output, "{}\n", board)?;
    }
    let outcome = board.outcome();
    writeln!(output, "Result: {}", outcome)?;
    Ok(outcome)
}
