//! Round history storage and aggregate statistics

use super::{StorageError, load_or_init, remove_file, write_json};
use crate::core::GameMode;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Record of a finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedRound {
    #[serde(rename = "user")]
    pub player: String,
    pub word: String,
    #[serde(rename = "gamemode")]
    pub mode: GameMode,
    pub is_win: bool,
    /// Guesses consumed, timed-out ones included
    pub tries: usize,
    pub score: i64,
    pub date: DateTime<Utc>,
}

/// Contents of the history file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub history: Vec<CompletedRound>,
}

/// Aggregate figures over every recorded round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_games: usize,
    pub total_wins: usize,
    pub total_losses: usize,
    pub total_score: i64,
}

impl Stats {
    #[must_use]
    pub fn from_rounds(rounds: &[CompletedRound]) -> Self {
        rounds.iter().fold(Self::default(), |mut stats, round| {
            stats.total_games += 1;
            if round.is_win {
                stats.total_wins += 1;
            } else {
                stats.total_losses += 1;
            }
            stats.total_score += round.score;
            stats
        })
    }
}

/// Destination for finished rounds
pub trait RoundLog {
    /// Record a finished round
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be persisted.
    fn append(&self, round: CompletedRound) -> Result<(), StorageError>;
}

/// File-backed round history
///
/// Every operation reads the file afresh. Concurrent writers are not
/// coordinated: the last write wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history, initializing the file if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or (re)written.
    pub fn load(&self) -> Result<History, StorageError> {
        load_or_init(&self.path)
    }

    /// All recorded rounds in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or (re)written.
    pub fn read_all(&self) -> Result<Vec<CompletedRound>, StorageError> {
        Ok(self.load()?.history)
    }

    /// Overwrite the file with `history`
    ///
    /// For callers that edit the whole history at once; [`RoundLog::append`]
    /// is the usual way to add a round. Returns `true` if the stored history
    /// differed from `history`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn save(&self, history: &History) -> Result<bool, StorageError> {
        let before = self.load()?;
        self.replace(&before, history)
    }

    /// Delete the history file
    ///
    /// Returns `true` if a file existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, StorageError> {
        let removed = remove_file(&self.path)?;
        debug!("Clear {}: removed={removed}", self.path.display());
        Ok(removed)
    }

    /// Totals over every recorded round
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or (re)written.
    pub fn aggregate(&self) -> Result<Stats, StorageError> {
        Ok(Stats::from_rounds(&self.read_all()?))
    }

    fn replace(&self, before: &History, after: &History) -> Result<bool, StorageError> {
        write_json(&self.path, after)?;
        Ok(before != after)
    }
}

impl RoundLog for HistoryStore {
    fn append(&self, round: CompletedRound) -> Result<(), StorageError> {
        let before = self.load()?;
        let mut after = before.clone();
        after.history.push(round);

        let changed = self.replace(&before, &after)?;
        debug!(
            "Appended round to {} ({} rounds, changed={changed})",
            self.path.display(),
            after.history.len()
        );
        Ok(())
    }
}
