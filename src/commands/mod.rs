//! Command implementations

pub mod play;
pub mod stats;
pub mod word;

pub use play::{TerminalPlayer, play_in, run_play};
pub use stats::{StatsReport, collect_stats, reset_stats};
pub use word::{add_word, list_words};
