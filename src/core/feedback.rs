//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one of three marks:
//! - `Exact` (letter in the correct position)
//! - `Present` (letter somewhere in the target, wrong position)
//! - `Absent` (letter not in the target)
//!
//! Presence is checked against the whole target without tracking letter
//! multiplicity: a letter appearing once in the target marks every misplaced
//! occurrence in the guess as `Present`.

use rustc_hash::FxHashSet;
use std::fmt;

/// Feedback mark for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Single-character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Marks for every position of a guess, paired with the guessed letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: Vec<(char, Mark)>,
}

impl Feedback {
    /// Classify `guess` against `target`
    ///
    /// Callers must pass strings of equal character length. With mismatched
    /// lengths only the positions shared by both strings are classified.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::classify("TSET", "TEST");
    /// assert_eq!(
    ///     feedback.marks().collect::<Vec<_>>(),
    ///     vec![Mark::Exact, Mark::Present, Mark::Present, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn classify(guess: &str, target: &str) -> Self {
        let present: FxHashSet<char> = target.chars().collect();

        let letters = guess
            .chars()
            .zip(target.chars())
            .map(|(g, t)| {
                let mark = if g == t {
                    Mark::Exact
                } else if present.contains(&g) {
                    Mark::Present
                } else {
                    Mark::Absent
                };
                (g, mark)
            })
            .collect();

        Self { letters }
    }

    /// Letters paired with their marks, in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[(char, Mark)] {
        &self.letters
    }

    /// Marks only, in guess order
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.letters.iter().map(|&(_, mark)| mark)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.letters.is_empty() && self.marks().all(|mark| mark == Mark::Exact)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks().filter(|&m| m == mark).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}
