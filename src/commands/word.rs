//! Dictionary maintenance commands

use crate::storage::{Dictionary, StorageError, WORDS_FILE};
use std::path::Path;

/// Add `word` to the dictionary in `data_dir`
///
/// Returns `false` if the word was blank or already known.
///
/// # Errors
///
/// Returns an error if the word list cannot be read or written.
pub fn add_word(data_dir: &Path, word: &str) -> Result<bool, StorageError> {
    Dictionary::open(data_dir.join(WORDS_FILE))?.add(word)
}

/// Words in the dictionary, optionally restricted to one length
///
/// # Errors
///
/// Returns an error if the word list cannot be read.
pub fn list_words(data_dir: &Path, length: Option<usize>) -> Result<Vec<String>, StorageError> {
    let dictionary = Dictionary::open(data_dir.join(WORDS_FILE))?;
    let words = match length {
        Some(length) => dictionary.words_of_length(length).map(str::to_string).collect(),
        None => dictionary.words().to_vec(),
    };
    Ok(words)
}
