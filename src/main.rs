//! tictac - terminal tic-tac-toe
//!
//! Interactive play, single-position analysis, and computer self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use tictac::{GameMode, PlayConfig, Session, report, terminal};
use tictac_engine::{Board, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            size,
            computer,
            config,
        } => run_play(mode, size, computer, config),
        Command::Best { board, json } => run_best(&board, json),
        Command::SelfPlay { size } => run_self_play(size),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    mode: Option<GameMode>,
    size: Option<usize>,
    computer: Option<Player>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(mode, size, computer);
    config.validate()?;
    info!(?config, "Starting interactive game");

    let mut session = Session::new(*config.mode(), *config.size(), *config.computer())?;
    let outcome = terminal::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    info!(%outcome, "Interactive game finished");
    Ok(())
}

/// Print the best move for a parsed position
#[instrument]
fn run_best(text: &str, json: bool) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;
    report::write_best(&board, json, io::stdout().lock())?;
    Ok(())
}

/// Play the computer against itself and print every position
#[instrument]
fn run_self_play(size: usize) -> Result<()> {
    let outcome = report::write_self_play(size, io::stdout().lock())?;
    info!(%outcome, "Self-play finished");
    Ok(())
}
