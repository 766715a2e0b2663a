//! Round configuration
//!
//! `PlayOptions` carries the raw values from the command line; `RoundConfig`
//! is the validated form the round controller runs on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Per-guess response deadline in timed mode
pub const TIMED_GUESS_LIMIT: Duration = Duration::from_secs(15);

/// Supported game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// No time limit. Older history files call this mode `default`.
    #[serde(alias = "default")]
    Standard,
    /// Each guess must be entered within [`TIMED_GUESS_LIMIT`]
    Timed,
}

impl GameMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Timed => "timed",
        }
    }

    /// Deadline applied to each guess, if any
    #[must_use]
    pub const fn time_limit(self) -> Option<Duration> {
        match self {
            Self::Standard => None,
            Self::Timed => Some(TIMED_GUESS_LIMIT),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "default" => Ok(Self::Standard),
            "timed" => Ok(Self::Timed),
            other => Err(ConfigError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Rejected round configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("game mode '{0}' is not available")]
    UnsupportedMode(String),
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("number of tries must be at least 1")]
    ZeroAttempts,
}

/// Unvalidated options for starting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub player: String,
    pub length: usize,
    pub max_attempts: usize,
    pub mode: String,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            player: "default".to_string(),
            length: 5,
            max_attempts: 6,
            mode: GameMode::Standard.name().to_string(),
        }
    }
}

/// Validated configuration for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub player: String,
    pub length: usize,
    pub max_attempts: usize,
    pub mode: GameMode,
}

impl RoundConfig {
    /// Validate raw options
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the mode is unknown or the length or attempt
    /// count is zero. The mode is checked first.
    pub fn new(options: &PlayOptions) -> Result<Self, ConfigError> {
        let mode = options.mode.parse::<GameMode>()?;

        if options.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if options.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self {
            player: options.player.clone(),
            length: options.length,
            max_attempts: options.max_attempts,
            mode,
        })
    }
}

impl TryFrom<&PlayOptions> for RoundConfig {
    type Error = ConfigError;

    fn try_from(options: &PlayOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}
