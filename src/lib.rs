//! tictac - tic-tac-toe with a perfect-play computer opponent.
//!
//! The game rules and search live in [`tictac_engine`]; this crate adds the
//! caller side: a [`Session`] that owns the current board and answers human
//! moves, TOML configuration, and a line-based terminal front end.
//!
//! # Example
//!
//! ```
//! use tictac::{GameMode, Session};
//! use tictac_engine::{Outcome, Player};
//!
//! # fn example() -> Result<(), tictac::SessionError> {
//! let mut session = Session::new(GameMode::Computer, 3, Player::O)?;
//! let turn = session.play(1, 1)?;
//! assert!(turn.reply.is_some());
//! assert_eq!(turn.outcome, Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod report;
mod session;
pub mod terminal;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};
pub use report::BestMoveReport;
pub use session::{GameMode, MAX_SEARCH_SIZE, Session, SessionError, Turn, play_out};
