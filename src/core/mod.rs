//! Core domain types for the game
//!
//! Pure feedback, scoring and configuration logic with no I/O.

mod config;
mod feedback;
mod score;

pub use config::{ConfigError, GameMode, PlayOptions, RoundConfig, TIMED_GUESS_LIMIT};
pub use feedback::{Feedback, Mark};
pub use score::{POINTS_PER_LETTER, SCORE_BASELINE, WIN_BONUS, score};
