//! Tie detection.

use super::super::Board;
use super::win::is_won;
use tracing::instrument;

/// Checks if the game is tied: every square occupied and no completed line.
///
/// A full board with a completed line is a win, never a tie.
#[instrument(level = "trace", skip(board))]
pub fn is_tied(board: &Board) -> bool {
    board.is_full() && is_won(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_tied() {
        assert!(!is_tied(&Board::standard()));
    }

    #[test]
    fn test_partial_board_not_tied() {
        let board = Board::standard().apply_move(1, 1).unwrap();
        assert!(!is_tied(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(is_tied(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_tied() {
        // X completes the main diagonal with the ninth move.
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(is_won(&board).is_some());
        assert!(!is_tied(&board));
    }
}
