//! Play configuration loaded from TOML.

use crate::session::{GameMode, MAX_SEARCH_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Board, Player};
use tracing::{debug, info, instrument};

/// File read when no config path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Settings for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Two humans, or a human against the computer.
    mode: GameMode,

    /// Grid dimension.
    size: usize,

    /// Mark played by the computer.
    computer: Player,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Computer,
            size: Board::STANDARD_SIZE,
            computer: Player::O,
        }
    }
}

impl PlayConfig {
    /// Creates a configuration from explicit values.
    pub fn new(mode: GameMode, size: usize, computer: Player) -> Self {
        Self {
            mode,
            size,
            computer,
        }
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(mode = %config.mode, size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces fields with any values given on the command line.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        size: Option<usize>,
        computer: Option<Player>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        self
    }

    /// Checks that the settings describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 {
            return Err(ConfigError::new("Board size must be at least 1".to_string()));
        }
        if self.mode == GameMode::Computer && self.size > MAX_SEARCH_SIZE {
            return Err(ConfigError::new(format!(
                "Computer mode supports boards up to {}x{}, got {}x{}",
                MAX_SEARCH_SIZE, MAX_SEARCH_SIZE, self.size, self.size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_play_against_computer() {
        let config = PlayConfig::default();
        assert_eq!(*config.mode(), GameMode::Computer);
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.computer(), Player::O);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str(r#"mode = "two-players""#).unwrap();
        assert_eq!(*config.mode(), GameMode::TwoPlayers);
        assert_eq!(*config.size(), 3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<PlayConfig>("difficulty = 3").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let err = PlayConfig::new(GameMode::TwoPlayers, 0, Player::O)
            .validate()
            .unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_validate_rejects_large_computer_board() {
        assert!(PlayConfig::new(GameMode::Computer, 4, Player::O).validate().is_err());
        assert!(PlayConfig::new(GameMode::TwoPlayers, 4, Player::O).validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(None, Some(2), Some(Player::X));
        assert_eq!(*config.mode(), GameMode::Computer);
        assert_eq!(*config.size(), 2);
        assert_eq!(*config.computer(), Player::X);
    }
}
