//! Tests for loading play configuration.

use std::fs;
use tictac::{GameMode, PlayConfig};
use tictac_engine::Player;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictac.toml");
    fs::write(&path, "mode = \"two-players\"\nsize = 4\ncomputer = \"X\"\n").unwrap();

    let config = PlayConfig::from_file(&path).unwrap();
    assert_eq!(config, PlayConfig::new(GameMode::TwoPlayers, 4, Player::X));
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(PlayConfig::from_file(&path).unwrap(), PlayConfig::default());
}

#[test]
fn test_explicit_path_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "computer = \"X\"\n").unwrap();

    let config = PlayConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(*config.computer(), Player::X);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "mode = \"network\"\n").unwrap();

    let err = PlayConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_invalid_settings_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.toml");
    fs::write(&path, "mode = \"computer\"\nsize = 5\n").unwrap();

    let err = PlayConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("up to 3x3"));
}
