//! Line-based terminal front end.
//!
//! Reads commands from any [`BufRead`] and writes the board to any
//! [`Write`], so the same loop serves stdin/stdout and tests.

use crate::session::{GameMode, Session, SessionError};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictac_engine::{Outcome, Position};
use tracing::{debug, instrument, warn};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at `(x, y)`.
    Move(usize, usize),
    /// Start a new game.
    Reset,
    /// Show the best move for the side to move.
    Hint,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parses `x y` (comma or whitespace separated) or a command word.
    #[instrument]
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Some(Command::Reset),
            "hint" | "h" => return Some(Command::Hint),
            "help" | "?" => return Some(Command::Help),
            "quit" | "q" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Command::Move(x, y))
    }
}

const HELP: &str = "Enter a move as `x y` (0-based column and row), or one of: \
                    hint, reset, help, quit.";

/// Runs the interactive loop until `quit` or end of input.
///
/// Returns the outcome of the position on screen when the loop ends.
#[instrument(skip_all, fields(mode = %session.mode()))]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> Result<Outcome> {
    writeln!(output, "{}", HELP)?;
    announce_opening(session, &mut output)?;
    show(session, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let Some(command) = Command::parse(&line) else {
            warn!(input = %line, "Unrecognized input");
            writeln!(output, "Unrecognized input: {:?}. {}", line.trim(), HELP)?;
            continue;
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Hint => match session.hint() {
                Some(pos) => writeln!(output, "Hint: {} plays {}", session.board().to_move(), pos)?,
                None => writeln!(output, "No hint available")?,
            },
            Command::Reset => {
                session.reset()?;
                writeln!(output, "New game.")?;
                announce_opening(session, &mut output)?;
                show(session, &mut output)?;
            }
            Command::Move(x, y) => match session.play(x, y) {
                Ok(turn) => {
                    if let Some(reply) = turn.reply {
                        writeln!(output, "Computer plays {}", reply)?;
                    }
                    show(session, &mut output)?;
                }
                Err(err @ (SessionError::Board { .. } | SessionError::GameOver { .. })) => {
                    warn!(%err, "Move rejected");
                    writeln!(output, "{}", err)?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(session.outcome())
}

/// Reports the computer's opening move when it plays first.
fn announce_opening<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    if *session.mode() == GameMode::Computer
        && let Some(first) = session.history().first()
    {
        writeln!(output, "Computer opens at {}", first)?;
    }
    Ok(())
}

/// Prints the board followed by the game status.
fn show<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    writeln!(output, "{}", session.board())?;
    match session.outcome() {
        Outcome::InProgress => writeln!(output, "{} to move", session.board().to_move())?,
        Outcome::Won { winner, line } => {
            writeln!(output, "{} wins along {}", winner, format_line(&line))?;
            writeln!(output, "Type `reset` to play again or `quit` to leave.")?;
        }
        Outcome::Tied => {
            writeln!(output, "It's a tie!")?;
            writeln!(output, "Type `reset` to play again or `quit` to leave.")?;
        }
    }
    Ok(())
}

fn format_line(line: &[Position]) -> String {
    line.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
