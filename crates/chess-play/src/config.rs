//! Configuration file loading for the terminal player.
//!
//! Settings are read from `chess-play.toml` in the current directory unless
//! another path is given. A missing file means defaults.

use chess_engine::{SessionConfig, SessionConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The `[session]` table holds out-of-range values.
    #[error(transparent)]
    InvalidSession(#[from] SessionConfigError),
}

/// Terminal player configuration.
///
/// ```toml
/// ai_delay_ms = 300
///
/// [session]
/// human = "black"
/// search_depth = 4
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Side and search depth for new games.
    #[serde(default)]
    pub session: SessionConfig,
    /// Pause before the AI replies, in milliseconds. Defaults to 300.
    #[serde(default = "default_ai_delay_ms")]
    pub ai_delay_ms: u64,
}

fn default_ai_delay_ms() -> u64 {
    300
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            session: SessionConfig::default(),
            ai_delay_ms: default_ai_delay_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] for invalid TOML and
    /// [`ConfigError::InvalidSession`] for an out-of-range search depth.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<PlayConfig>(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Default config file location.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-play.toml")
    }

    /// Validates the session settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        Ok(())
    }
}
