//! Wordle CLI
//!
//! A command-line word-guessing game with an optional timed mode and
//! persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{Feedback, Mark, score};
//!
//! let feedback = Feedback::classify("crane", "slate");
//! assert_eq!(feedback.count(Mark::Exact), 2);
//!
//! assert_eq!(score(&["crane", "slate"], "slate"), 2000);
//! ```

// Core domain types
pub mod core;

// Round state machine and controller
pub mod round;

// Word list and history files
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::GameError;
