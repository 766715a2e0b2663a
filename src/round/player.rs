//! The player seam: guess acquisition and round notifications

use crate::core::{Feedback, GameMode};
use crate::storage::CompletedRound;
use std::io;
use std::time::{Duration, Instant};

/// Something that happened during a round, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent<'a> {
    /// The requested mode is not supported; the round never started
    ModeRejected { mode: &'a str },
    Started {
        length: usize,
        max_attempts: usize,
        mode: GameMode,
    },
    /// A guess is about to be requested
    Turn {
        attempts_remaining: usize,
        time_limit: Option<Duration>,
    },
    /// The guess arrived after the deadline and was not checked
    TimedOut { elapsed: Duration },
    Feedback(&'a Feedback),
    Finished(&'a CompletedRound),
}

/// Source of guesses and sink for round events
pub trait Player {
    /// Block until the player submits a guess for a word of `length` letters
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no guess can be read.
    fn read_guess(&mut self, length: usize) -> io::Result<String>;

    /// Observe a round event
    fn notify(&mut self, _event: &RoundEvent<'_>) {}
}

/// Time source for the per-guess deadline
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
