//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac::GameMode;
use tictac_engine::Player;

/// Tic-tac-toe with a perfect-play computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode (two-players or computer); overrides the config file
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Board size; overrides the config file
        #[arg(short, long)]
        size: Option<usize>,

        /// Mark played by the computer (X or O); overrides the config file
        #[arg(long)]
        computer: Option<Player>,

        /// Path to a TOML config file (defaults to tictac.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the best move for a position
    Best {
        /// Board rows separated by `/`, e.g. "XO./.X./..."
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides from an empty board
    SelfPlay {
        /// Board size
        #[arg(short, long, default_value = "3")]
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "tictac", "play", "--mode", "two-players", "--size", "4", "--computer", "x",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                size,
                computer,
                config,
            } => {
                assert_eq!(mode, Some(GameMode::TwoPlayers));
                assert_eq!(size, Some(4));
                assert_eq!(computer, Some(Player::X));
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_self_play_default_size() {
        let cli = Cli::try_parse_from(["tictac", "self-play"]).unwrap();
        assert!(matches!(cli.command, Command::SelfPlay { size: 3 }));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["tictac", "play", "--mode", "network"]).is_err());
    }
}
