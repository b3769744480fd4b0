//! Exhaustive minimax search.
//!
//! `X` always maximizes and `O` always minimizes, whichever side is to move
//! at the root. Every reachable position is visited; there is no pruning and
//! no depth limit, so this is only practical on boards up to 3×3.

use super::rules::is_won;
use super::{Board, Player, Position};
use tracing::{debug, instrument};

/// Score of a position won by `X`.
pub const X_WINS: i8 = 1;
/// Score of a position won by `O`.
pub const O_WINS: i8 = -1;
/// Score of a tied position.
pub const TIE: i8 = 0;

/// Returns the optimal move for the side to move.
///
/// `None` when the position is already won or tied. Among equally scored
/// moves the first one in grid order (ascending `y`, then `x`) is chosen,
/// so the result is deterministic.
#[instrument(skip(board), fields(to_move = %board.to_move(), marks = board.move_count()))]
pub fn best_move(board: &Board) -> Option<Position> {
    if is_terminal(board) {
        debug!("Position is terminal, no move to search");
        return None;
    }

    let (score, chosen) = minimax(board);
    debug!(?chosen, score, "Search complete");
    chosen
}

/// Minimax value of a position under perfect play by both sides.
///
/// [`X_WINS`], [`O_WINS`] or [`TIE`].
#[instrument(skip(board), fields(to_move = %board.to_move()))]
pub fn evaluate(board: &Board) -> i8 {
    minimax(board).0
}

fn is_terminal(board: &Board) -> bool {
    is_won(board).is_some() || board.is_full()
}

/// Scores `board` and picks the move that reaches that score.
fn minimax(board: &Board) -> (i8, Option<Position>) {
    if is_won(board).is_some() {
        // The side that just moved completed the line.
        let score = match board.to_move() {
            Player::O => X_WINS,
            Player::X => O_WINS,
        };
        return (score, None);
    }
    // Not won, so a full board is a tie.
    if board.is_full() {
        return (TIE, None);
    }

    let maximizing = board.to_move() == Player::X;
    // Sentinel outside the score range so the first child always replaces it.
    let mut best_score = if maximizing { O_WINS - 1 } else { X_WINS + 1 };
    let mut best_move = None;

    for pos in board.empty_cells() {
        let (score, _) = minimax(&board.with_move(pos));
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_move_on_won_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(board.is_won().is_some());
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(best_move(&board), None);
        assert_eq!(evaluate(&board), TIE);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Column 0 is open for X, and O threatens column 1.
        let board: Board = "XO./XO./...".parse().unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(best_move(&board), Some(Position::new(0, 2)));
        assert_eq!(evaluate(&board), X_WINS);
    }

    #[test]
    fn test_blocks_opponent() {
        // O to move must block X at (2, 0).
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(best_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_o_minimizes_when_winning() {
        // O wins by completing the middle row.
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(best_move(&board), Some(Position::new(2, 1)));
        assert_eq!(evaluate(&board), O_WINS);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(1).unwrap();
        assert_eq!(best_move(&board), Some(Position::new(0, 0)));
        assert_eq!(evaluate(&board), X_WINS);
    }

    #[test]
    fn test_two_by_two_first_player_wins() {
        let board = Board::new(2).unwrap();
        assert_eq!(evaluate(&board), X_WINS);
        assert_eq!(best_move(&board), Some(Position::new(0, 0)));
    }
}
