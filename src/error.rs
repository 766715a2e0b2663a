//! Crate-level error type

use crate::core::ConfigError;
use crate::storage::StorageError;
use std::io;
use thiserror::Error;

/// Errors that stop a round or a command
#[derive(Debug, Error)]
pub enum GameError {
    /// The word source holds no word of the requested length
    #[error("no word of length {length} found in the dictionary")]
    WordNotFound { length: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to read guess: {0}")]
    Input(#[source] io::Error),
}
