//! Display functions for rounds and statistics

use super::formatters::{feedback_to_colored, feedback_to_emoji, result_label};
use crate::round::RoundEvent;
use crate::storage::{CompletedRound, Stats};
use colored::Colorize;

/// Text shown to the player for a round event
#[must_use]
pub fn describe_event(event: &RoundEvent<'_>) -> String {
    match event {
        RoundEvent::ModeRejected { mode } => {
            format!("Game mode '{mode}' is not available")
        }
        RoundEvent::Started {
            length,
            max_attempts,
            ..
        } => format!(
            "Welcome to Wordle! The word to find has {length} letters.\n\
             You have {max_attempts} tries to find it.\n"
        ),
        RoundEvent::Turn {
            attempts_remaining,
            time_limit,
        } => {
            let mut text = format!("You have {attempts_remaining} tries left.");
            if let Some(limit) = time_limit {
                text.push_str(&format!(
                    "\nYou have {} seconds to answer!",
                    limit.as_secs()
                ));
            }
            text
        }
        RoundEvent::TimedOut { elapsed } => {
            format!("Time's up! ({:.1} seconds)", elapsed.as_secs_f64())
        }
        RoundEvent::Feedback(feedback) => format!(
            "{}  {}",
            feedback_to_colored(feedback),
            feedback_to_emoji(feedback)
        ),
        RoundEvent::Finished(round) => describe_round_end(round),
    }
}

fn describe_round_end(round: &CompletedRound) -> String {
    let mut text = format!(
        "Game over, you {}! The word was: {}\nYou used {} tries.",
        result_label(round.is_win),
        round.word.bright_yellow().bold(),
        round.tries
    );
    if round.is_win {
        text.push_str(&format!("\nYour score is {}", round.score));
    }
    text
}

/// The four aggregate lines shown by `stats`
#[must_use]
pub fn stats_lines(stats: &Stats) -> [String; 4] {
    [
        format!("Total games played: {}", stats.total_games),
        format!("Total games won: {}", stats.total_wins),
        format!("Total games lost: {}", stats.total_losses),
        format!("Total points earned: {}", stats.total_score),
    ]
}

/// Print aggregate statistics
pub fn print_stats(stats: &Stats) {
    println!("{}", "Player statistics:".bright_cyan().bold());
    for line in stats_lines(stats) {
        println!("{line}");
    }
}

/// Print every recorded round, oldest first
pub fn print_history(rounds: &[CompletedRound]) {
    println!("\n{}", "─".repeat(60).cyan());
    if rounds.is_empty() {
        println!("No games recorded yet.");
        return;
    }

    for (i, round) in rounds.iter().enumerate() {
        let result = if round.is_win {
            result_label(true).green()
        } else {
            result_label(false).red()
        };
        println!(
            "{:>3}. {} {} [{}] {} in {} tries, {} points ({})",
            (i + 1).to_string().bright_black(),
            round.player,
            round.word.bright_white().bold(),
            round.mode,
            result,
            round.tries,
            round.score,
            round.date.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Print the words held by the dictionary
pub fn print_words<'w>(words: impl IntoIterator<Item = &'w str>) {
    let mut count = 0;
    for word in words {
        println!("  • {word}");
        count += 1;
    }
    println!("{count} words");
}
