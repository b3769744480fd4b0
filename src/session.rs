//! Game session: owns the current board and drives the computer opponent.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictac_engine::{Board, BoardError, Outcome, Player, Position, best_move};
use tracing::{debug, info, instrument};

/// Largest board on which the exhaustive search finishes in reasonable time.
pub const MAX_SEARCH_SIZE: usize = 3;

/// Who controls the marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans alternate at the same terminal.
    TwoPlayers,
    /// A human plays against the minimax search.
    #[default]
    Computer,
}

/// Error that can occur when driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The engine rejected the board size or the move.
    #[display("{source}")]
    Board {
        /// Underlying engine error.
        source: BoardError,
    },

    /// A move was attempted after the game ended.
    #[display("Game is already over ({outcome})")]
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },

    /// The computer cannot search a board this large.
    #[display("Computer play supports boards up to {max}x{max}, got {size}x{size}")]
    SearchTooLarge {
        /// Requested board size.
        size: usize,
        /// Largest supported size.
        max: usize,
    },
}

impl From<BoardError> for SessionError {
    fn from(source: BoardError) -> Self {
        Self::Board { source }
    }
}

/// Result of one human move, including the computer's reply if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// The human's move.
    pub played: Position,
    /// The computer's answer, in [`GameMode::Computer`] while the game continues.
    pub reply: Option<Position>,
    /// Position classification after both moves.
    pub outcome: Outcome,
}

/// A single game in progress.
///
/// The session holds the current [`Board`] value and replaces it after every
/// move; boards themselves are never mutated.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Who controls the marks.
    mode: GameMode,
    /// Mark played by the computer in [`GameMode::Computer`].
    computer: Player,
    /// Current position.
    board: Board,
    /// Moves applied since the last reset, in order.
    history: Vec<Position>,
}

impl Session {
    /// Starts a new game.
    ///
    /// In [`GameMode::Computer`] with the computer playing `X`, the opening
    /// move is made immediately.
    #[instrument]
    pub fn new(mode: GameMode, size: usize, computer: Player) -> Result<Self, SessionError> {
        if mode == GameMode::Computer && size > MAX_SEARCH_SIZE {
            return Err(SessionError::SearchTooLarge {
                size,
                max: MAX_SEARCH_SIZE,
            });
        }

        let mut session = Self {
            mode,
            computer,
            board: Board::new(size)?,
            history: Vec::new(),
        };
        info!(%mode, size, %computer, "Starting new game");
        session.computer_reply()?;
        Ok(session)
    }

    /// Returns true when the next move belongs to the computer.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Computer
            && self.board.to_move() == self.computer
            && !self.board.outcome().is_over()
    }

    /// Classifies the current position.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Optimal move for the side to move, if the board is small enough to search.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Option<Position> {
        if self.board.size() > MAX_SEARCH_SIZE {
            debug!(size = self.board.size(), "Board too large for hints");
            return None;
        }
        best_move(&self.board)
    }

    /// Plays the human move at `(x, y)`, then the computer's reply in
    /// [`GameMode::Computer`].
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game has ended, or
    /// [`SessionError::Board`] for an occupied or off-board square. The
    /// session is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.board.to_move()))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<Turn, SessionError> {
        let outcome = self.board.outcome();
        if outcome.is_over() {
            return Err(SessionError::GameOver { outcome });
        }

        let played = Position::new(x, y);
        self.board = self.board.apply_move(x, y)?;
        self.history.push(played);
        debug!(%played, "Human move applied");

        let reply = self.computer_reply()?;
        let outcome = self.board.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Game over");
        }

        Ok(Turn {
            played,
            reply,
            outcome,
        })
    }

    /// Starts over on an empty board with the same mode and size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.board = Board::new(self.board.size())?;
        self.history.clear();
        info!(mode = %self.mode, "Game reset");
        self.computer_reply()?;
        Ok(())
    }

    /// Lets the computer move if it is its turn.
    fn computer_reply(&mut self) -> Result<Option<Position>, SessionError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(reply) = best_move(&self.board) else {
            return Ok(None);
        };
        self.board = self.board.apply_move(reply.x, reply.y)?;
        self.history.push(reply);
        debug!(%reply, computer = %self.computer, "Computer move applied");
        Ok(Some(reply))
    }
}

/// Plays `board` to the end with [`best_move`] choosing for both sides.
///
/// Returns the moves made and the final position.
#[instrument(skip(board), fields(size = board.size()))]
pub fn play_out(board: &Board) -> Result<(Vec<Position>, Board), SessionError> {
    if board.size() > MAX_SEARCH_SIZE {
        return Err(SessionError::SearchTooLarge {
            size: board.size(),
            max: MAX_SEARCH_SIZE,
        });
    }

    let mut current = board.clone();
    let mut moves = Vec::new();
    while let Some(pos) = best_move(&current) {
        current = current.apply_move(pos.x, pos.y)?;
        moves.push(pos);
    }
    Ok((moves, current))
}
