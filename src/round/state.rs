//! Mutable state of a round in progress

use crate::core::{Feedback, WIN_BONUS, score};

/// Result of submitting an in-time guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess equals the target
    Solved,
    /// The guess missed; feedback for each letter
    Miss(Feedback),
}

/// State owned by the round controller for the duration of one round
///
/// The round is over once the attempts run out or the target is found. Every
/// accepted guess consumes exactly one attempt and is logged, whether or not
/// it was compared to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: String,
    attempts_remaining: usize,
    guesses: Vec<String>,
    won: bool,
    score: Option<i64>,
}

impl RoundState {
    #[must_use]
    pub fn new(target: impl Into<String>, max_attempts: usize) -> Self {
        Self {
            target: target.into(),
            attempts_remaining: max_attempts,
            guesses: Vec::new(),
            won: false,
            score: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    /// Every guess consumed so far, in submission order
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.attempts_remaining == 0 || self.won
    }

    /// Final score, or 0 while the round is still running
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    /// Compare a guess to the target
    ///
    /// Returns `None` without consuming anything if the round is already over.
    pub fn submit(&mut self, guess: impl Into<String>) -> Option<GuessOutcome> {
        let guess = guess.into();
        if self.is_over() {
            return None;
        }

        let outcome = if guess == self.target {
            self.won = true;
            GuessOutcome::Solved
        } else {
            GuessOutcome::Miss(Feedback::classify(&guess, &self.target))
        };
        self.consume(guess);
        Some(outcome)
    }

    /// Log a guess that arrived after the deadline
    ///
    /// The guess uses up an attempt but is never compared to the target.
    /// Returns `false` if the round is already over.
    pub fn time_out(&mut self, guess: impl Into<String>) -> bool {
        if self.is_over() {
            return false;
        }
        self.consume(guess.into());
        true
    }

    /// Fix the final score
    ///
    /// A won round scores [`score`] plus [`WIN_BONUS`]; a lost round scores 0.
    /// The first call decides the score and later calls return it unchanged.
    pub fn finish(&mut self) -> i64 {
        let won = self.won;
        let guesses = self.guesses.as_slice();
        let target = &self.target;
        *self.score.get_or_insert_with(|| {
            if won {
                score(guesses, target) + WIN_BONUS
            } else {
                0
            }
        })
    }

    fn consume(&mut self, guess: String) {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.guesses.push(guess);
    }
}
