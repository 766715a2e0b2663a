//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Colour one guessed letter by its mark
#[must_use]
pub fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let text = letter.to_string();
    match mark {
        Mark::Exact => text.green(),
        Mark::Present => text.yellow(),
        Mark::Absent => text.white(),
    }
}

/// Format feedback as the guess with each letter coloured
#[must_use]
pub fn feedback_to_colored(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|&(letter, mark)| colored_letter(letter, mark).to_string())
        .collect()
}

/// Format feedback as an emoji strip
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .marks()
        .map(|mark| match mark {
            Mark::Exact => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Human-readable win/loss label
#[must_use]
pub const fn result_label(is_win: bool) -> &'static str {
    if is_win { "won" } else { "lost" }
}
