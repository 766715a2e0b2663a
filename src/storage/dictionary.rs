//! Word list storage
//!
//! The dictionary is a JSON array of words. It is loaded once on open and
//! kept in memory; additions rewrite the whole file.

use super::{StorageError, load_or_init, write_json};
use crate::error::GameError;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

/// Source of target words for a round
pub trait WordSource {
    /// Pick a word of exactly `length` characters uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordNotFound` if no word has that length.
    fn random_word(&self, length: usize) -> Result<String, GameError>;
}

/// File-backed word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    path: PathBuf,
    words: Vec<String>,
}

impl Dictionary {
    /// Open the word list at `path`, creating an empty one if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or (re)written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let words: Vec<String> = load_or_init(&path)?;
        debug!("Dictionary {} holds {} words", path.display(), words.len());
        Ok(Self { path, words })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words with exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.chars().count() == length)
    }

    /// Pick a word of `length` characters using the given generator
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordNotFound` if no word has that length.
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<String, GameError> {
        let candidates: Vec<&str> = self.words_of_length(length).collect();
        candidates
            .choose(rng)
            .map(|word| (*word).to_string())
            .ok_or(GameError::WordNotFound { length })
    }

    /// Add a word and persist the list
    ///
    /// Surrounding whitespace is trimmed. Returns `false` without touching the
    /// file if the word is empty or already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn add(&mut self, word: &str) -> Result<bool, StorageError> {
        let word = word.trim();
        if word.is_empty() || self.words.iter().any(|w| w == word) {
            return Ok(false);
        }

        self.words.push(word.to_string());
        write_json(&self.path, &self.words)?;
        debug!("Added '{word}' to {}", self.path.display());
        Ok(true)
    }
}

impl WordSource for Dictionary {
    fn random_word(&self, length: usize) -> Result<String, GameError> {
        self.random_word_with(length, &mut rand::rng())
    }
}
