//! Statistics commands

use crate::storage::{CompletedRound, HistoryStore, STATS_FILE, Stats, StorageError};
use std::path::Path;

/// Aggregates, plus the individual rounds when requested
pub struct StatsReport {
    pub stats: Stats,
    pub rounds: Option<Vec<CompletedRound>>,
}

/// Collect statistics from the history in `data_dir`
///
/// # Errors
///
/// Returns an error if the history file cannot be accessed.
pub fn collect_stats(data_dir: &Path, include_rounds: bool) -> Result<StatsReport, StorageError> {
    let store = HistoryStore::new(data_dir.join(STATS_FILE));
    if !include_rounds {
        return Ok(StatsReport {
            stats: store.aggregate()?,
            rounds: None,
        });
    }

    let rounds = store.read_all()?;
    Ok(StatsReport {
        stats: Stats::from_rounds(&rounds),
        rounds: Some(rounds),
    })
}

/// Delete the history in `data_dir`
///
/// Returns `true` if there was a history to delete.
///
/// # Errors
///
/// Returns an error if the history file exists but cannot be removed.
pub fn reset_stats(data_dir: &Path) -> Result<bool, StorageError> {
    HistoryStore::new(data_dir.join(STATS_FILE)).clear()
}
