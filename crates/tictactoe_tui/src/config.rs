//! Configuration for the terminal game.

use crate::settings::FirstPlayer;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::DEFAULT_MISTAKE_CHANCE;
use tracing::{debug, info, instrument};

/// File read when no `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Who opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Chance the computer plays a random move instead of its heuristic.
    #[serde(default = "default_mistake_chance")]
    mistake_chance: f64,

    /// Seed for a reproducible computer player.
    #[serde(default)]
    seed: Option<u64>,

    /// Where log output goes while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_thinking_delay_ms() -> u64 {
    300
}

fn default_mistake_chance() -> f64 {
    DEFAULT_MISTAKE_CHANCE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            thinking_delay_ms: default_thinking_delay_ms(),
            mistake_chance: default_mistake_chance(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] when present,
    /// else built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        first_player: Option<FirstPlayer>,
        thinking_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if let Some(delay) = thinking_delay_ms {
            self.thinking_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Pause before the computer moves.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "first_player = \"computer\"\nseed = 7").expect("write");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.thinking_delay_ms(), 300);
        assert_eq!(*config.mistake_chance(), DEFAULT_MISTAKE_CHANCE);
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "first_player = \"nobody\"").expect("write");

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config =
            TuiConfig::default().with_overrides(Some(FirstPlayer::Computer), Some(0), None);
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(config.thinking_delay(), Duration::ZERO);
        assert_eq!(*config.seed(), None);
    }
}
