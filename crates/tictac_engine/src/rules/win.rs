//! Win detection.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// A straight line of `size` cells that wins when fully held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row at the given `y`.
    Row(usize),
    /// Column at the given `x`.
    Column(usize),
    /// `(0, 0)` to `(size - 1, size - 1)`.
    Diagonal,
    /// `(0, size - 1)` to `(size - 1, 0)`.
    AntiDiagonal,
}

impl Line {
    /// Every line of a `size × size` grid in checking order:
    /// rows by ascending `y`, columns by ascending `x`, then both diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The cells of this line, ordered by ascending step index.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(y) => Position::new(i, y),
            Line::Column(x) => Position::new(x, i),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}

/// Returns the winning line of the player who just moved, if any.
///
/// Only the mark of the side *not* to move is checked: positions are always
/// examined right after a move, so the previous mover is the only possible
/// new winner.
#[instrument(level = "trace", skip(board), fields(mover = %board.to_move().opponent()))]
pub fn is_won(board: &Board) -> Option<Vec<Position>> {
    completed_line(board, board.to_move().opponent())
}

/// First line, in [`Line::all`] order, fully held by `player`.
pub(crate) fn completed_line(board: &Board, player: Player) -> Option<Vec<Position>> {
    let mark = Square::Occupied(player);
    let size = board.size();
    Line::all(size)
        .find(|line| line.cells(size).all(|pos| board.get(pos) == Some(mark)))
        .map(|line| line.cells(size).collect())
}
