//! Flat-file persistence
//!
//! Both the dictionary and the round history live in small JSON files that
//! are rewritten in full on every change. A missing, blank or unparsable file
//! is replaced by an empty structure before it is read.

mod dictionary;
mod history;

pub use dictionary::{Dictionary, WordSource};
pub use history::{CompletedRound, History, HistoryStore, RoundLog, Stats};

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the word list inside the data directory
pub const WORDS_FILE: &str = "words.json";

/// File name of the round history inside the data directory
pub const STATS_FILE: &str = "stats.json";

/// Failure to write or access a storage file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read `path` as JSON, replacing it with `T::default()` if it is absent,
/// blank or does not parse
pub(crate) fn load_or_init<T>(path: &Path) -> Result<T, StorageError>
where
    T: DeserializeOwned + Serialize + Default,
{
    match fs::read_to_string(path) {
        Ok(content) if !content.trim().is_empty() => match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Loaded {}", path.display());
                return Ok(value);
            }
            Err(e) => warn!("Discarding unreadable {}: {e}", path.display()),
        },
        Ok(_) => info!("{} is empty, initializing", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} does not exist, creating", path.display());
        }
        Err(e) => return Err(StorageError::io(path, e)),
    }

    let value = T::default();
    write_json(path, &value)?;
    Ok(value)
}

/// Serialize `value` and overwrite `path`, creating parent directories
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| StorageError::io(path, e))
}

/// Remove `path` if it exists
///
/// Returns `true` if a file was removed.
pub(crate) fn remove_file(path: &Path) -> Result<bool, StorageError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StorageError::io(path, e)),
    }
}
