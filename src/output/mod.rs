//! Terminal output formatting
//!
//! Display utilities for rounds, statistics and word lists.

pub mod display;
pub mod formatters;
pub mod terminal;

pub use display::{describe_event, print_history, print_stats, print_words, stats_lines};
pub use terminal::clear_screen;
