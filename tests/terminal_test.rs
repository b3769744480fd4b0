//! Tests for the terminal front end.

use std::io::Cursor;
use tictac::{GameMode, Session, terminal};
use tictac_engine::{Outcome, Player};

fn run(session: &mut Session, input: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = terminal::run(session, Cursor::new(input), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_two_player_win_is_announced() {
    let mut session = Session::new(GameMode::TwoPlayers, 3, Player::O).unwrap();
    let (outcome, output) = run(&mut session, "0 0\n1 0\n0 1\n1 1\n0 2\nquit\n");

    assert!(matches!(outcome, Outcome::Won { winner: Player::X, .. }));
    assert!(output.contains("X wins along (0, 0) (0, 1) (0, 2)"), "{}", output);
    assert!(output.contains("X . .\n. . .\n. . ."), "{}", output);
}

#[test]
fn test_bad_input_does_not_end_game() {
    let mut session = Session::new(GameMode::TwoPlayers, 3, Player::O).unwrap();
    let (outcome, output) = run(&mut session, "5 5\nfoo\n1 1\n1 1\n");

    assert_eq!(outcome, Outcome::InProgress);
    assert!(output.contains("Illegal move at (5, 5)"), "{}", output);
    assert!(output.contains("Unrecognized input: \"foo\""), "{}", output);
    assert!(output.contains("square is already occupied"), "{}", output);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_computer_reply_is_printed() {
    let mut session = Session::new(GameMode::Computer, 3, Player::O).unwrap();
    let (_, output) = run(&mut session, "1 1\n");

    assert!(output.contains("Computer plays"), "{}", output);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_computer_opening_is_announced() {
    let mut session = Session::new(GameMode::Computer, 3, Player::X).unwrap();
    let (_, output) = run(&mut session, "");
    assert!(output.contains("Computer opens at (0, 0)"), "{}", output);
}

#[test]
fn test_hint_on_empty_board() {
    let mut session = Session::new(GameMode::Computer, 3, Player::O).unwrap();
    let (_, output) = run(&mut session, "hint\n");
    assert!(output.contains("Hint: X plays (0, 0)"), "{}", output);
}

#[test]
fn test_reset_and_game_over() {
    let mut session = Session::new(GameMode::TwoPlayers, 3, Player::O).unwrap();
    let (outcome, output) = run(&mut session, "0 0\n1 0\n0 1\n1 1\n0 2\n2 2\nreset\n");

    assert!(output.contains("Game is already over (X wins)"), "{}", output);
    assert!(output.contains("New game."), "{}", output);
    assert_eq!(outcome, Outcome::InProgress);
    assert!(session.history().is_empty());
}
