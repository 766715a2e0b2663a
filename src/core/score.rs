//! Round scoring

/// Guess count the score formula is measured against
pub const SCORE_BASELINE: i64 = 6;

/// Points per letter of the target for each guess saved
pub const POINTS_PER_LETTER: i64 = 100;

/// Bonus added to a winning round on top of [`score`]
pub const WIN_BONUS: i64 = 500;

/// Score for the guesses used to find `target`
///
/// `100 × (6 - guesses) × target length`. The baseline is fixed at 6 whatever
/// the configured attempt budget, so rounds with more than 6 guesses score
/// below zero. The win bonus is not included.
///
/// # Examples
/// ```
/// use wordle_cli::core::score;
///
/// assert_eq!(score(&["TEST"], "TEST"), 2000);
/// assert_eq!(score(&["ABCD", "EFGH", "TEST"], "LONGER"), 1800);
/// ```
#[must_use]
pub fn score<S: AsRef<str>>(guesses: &[S], target: &str) -> i64 {
    let used = guesses.len() as i64;
    let length = target.chars().count() as i64;
    POINTS_PER_LETTER * (SCORE_BASELINE - used) * length
}
