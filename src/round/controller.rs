//! Round controller
//!
//! Runs one round from word draw to persisted result:
//! 1. Validate the options; an unsupported mode ends here with nothing drawn
//! 2. Draw the target word
//! 3. Collect guesses until the word is found or the attempts run out
//! 4. Score the round and append it to the history

use super::player::{Clock, Player, RoundEvent, SystemClock};
use super::state::{GuessOutcome, RoundState};
use crate::core::{ConfigError, PlayOptions, RoundConfig};
use crate::error::GameError;
use crate::storage::{CompletedRound, RoundLog, WordSource};
use chrono::Utc;
use log::{debug, info, trace};

/// Plays rounds against a word source, recording each result to a log
pub struct Game<'a, W: ?Sized, L: ?Sized, C = SystemClock> {
    words: &'a W,
    log: &'a L,
    clock: C,
}

impl<'a, W, L> Game<'a, W, L>
where
    W: WordSource + ?Sized,
    L: RoundLog + ?Sized,
{
    #[must_use]
    pub const fn new(words: &'a W, log: &'a L) -> Self {
        Self {
            words,
            log,
            clock: SystemClock,
        }
    }
}

impl<'a, W, L, C> Game<'a, W, L, C>
where
    W: WordSource + ?Sized,
    L: RoundLog + ?Sized,
    C: Clock,
{
    /// Replace the clock used for timed mode
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Game<'a, W, L, C2> {
        Game {
            words: self.words,
            log: self.log,
            clock,
        }
    }

    /// Play one round to completion
    ///
    /// Returns `Ok(None)` if the mode is unsupported: the player is notified
    /// and nothing is drawn or recorded.
    ///
    /// # Errors
    ///
    /// - `GameError::Config` for a zero length or attempt count
    /// - `GameError::WordNotFound` if no word has the requested length
    /// - `GameError::Input` if a guess cannot be read
    /// - `GameError::Storage` if the result cannot be recorded
    pub fn play<P: Player + ?Sized>(
        &self,
        options: &PlayOptions,
        player: &mut P,
    ) -> Result<Option<CompletedRound>, GameError> {
        let Some(config) = accept_options(options, player)? else {
            return Ok(None);
        };

        self.play_round(&config, player).map(Some)
    }

    /// Play one round with an already validated configuration
    ///
    /// # Errors
    ///
    /// Same as [`Game::play`], minus configuration errors.
    pub fn play_round<P: Player + ?Sized>(
        &self,
        config: &RoundConfig,
        player: &mut P,
    ) -> Result<CompletedRound, GameError> {
        let target = self.words.random_word(config.length)?;
        debug!(
            "Starting {} round for '{}': length={}, attempts={}",
            config.mode, config.player, config.length, config.max_attempts
        );
        trace!("Target word: {target}");

        let mut state = RoundState::new(target, config.max_attempts);
        let time_limit = config.mode.time_limit();

        player.notify(&RoundEvent::Started {
            length: config.length,
            max_attempts: config.max_attempts,
            mode: config.mode,
        });

        while !state.is_over() {
            player.notify(&RoundEvent::Turn {
                attempts_remaining: state.attempts_remaining(),
                time_limit,
            });

            let started = time_limit.map(|_| self.clock.now());
            let guess = player.read_guess(config.length).map_err(GameError::Input)?;

            if let (Some(limit), Some(started)) = (time_limit, started) {
                let elapsed = self.clock.now().saturating_duration_since(started);
                if elapsed > limit {
                    debug!("Guess took {elapsed:?}, over the {limit:?} limit");
                    state.time_out(guess);
                    player.notify(&RoundEvent::TimedOut { elapsed });
                    continue;
                }
            }

            if let Some(GuessOutcome::Miss(feedback)) = state.submit(guess) {
                player.notify(&RoundEvent::Feedback(&feedback));
            }
        }

        let score = state.finish();
        let round = CompletedRound {
            player: config.player.clone(),
            word: state.target().to_string(),
            mode: config.mode,
            is_win: state.won(),
            tries: state.guesses().len(),
            score,
            date: Utc::now(),
        };

        self.log.append(round.clone())?;
        player.notify(&RoundEvent::Finished(&round));
        info!(
            "Round finished: won={}, tries={}, score={}",
            round.is_win, round.tries, round.score
        );

        Ok(round)
    }
}

/// Validate round options before anything is drawn or opened
///
/// An unsupported mode is reported to the player and yields `Ok(None)`.
///
/// # Errors
///
/// Returns `GameError::Config` for a zero length or attempt count.
pub fn accept_options<P: Player + ?Sized>(
    options: &PlayOptions,
    player: &mut P,
) -> Result<Option<RoundConfig>, GameError> {
    match RoundConfig::new(options) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::UnsupportedMode(mode)) => {
            info!("Rejected round with unsupported mode '{mode}'");
            player.notify(&RoundEvent::ModeRejected { mode: &mode });
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Mark};
    use crate::storage::StorageError;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::io;
    use std::time::{Duration, Instant};

    /// Word source that always draws the same word
    struct FixedWord {
        word: &'static str,
        draws: Cell<usize>,
    }

    impl FixedWord {
        fn new(word: &'static str) -> Self {
            Self {
                word,
                draws: Cell::new(0),
            }
        }
    }

    impl WordSource for FixedWord {
        fn random_word(&self, length: usize) -> Result<String, GameError> {
            self.draws.set(self.draws.get() + 1);
            if self.word.chars().count() == length {
                Ok(self.word.to_string())
            } else {
                Err(GameError::WordNotFound { length })
            }
        }
    }

    #[derive(Default)]
    struct MemoryLog {
        rounds: RefCell<Vec<CompletedRound>>,
    }

    impl RoundLog for MemoryLog {
        fn append(&self, round: CompletedRound) -> Result<(), StorageError> {
            self.rounds.borrow_mut().push(round);
            Ok(())
        }
    }

    /// Player that submits a fixed list of guesses and records what it sees
    struct ScriptedPlayer {
        guesses: VecDeque<&'static str>,
        feedback: Vec<String>,
        timeouts: usize,
        turns: Vec<usize>,
        rejected: Option<String>,
        finished: Option<CompletedRound>,
    }

    impl ScriptedPlayer {
        fn new(guesses: &[&'static str]) -> Self {
            Self {
                guesses: guesses.iter().copied().collect(),
                feedback: Vec::new(),
                timeouts: 0,
                turns: Vec::new(),
                rejected: None,
                finished: None,
            }
        }
    }

    impl Player for ScriptedPlayer {
        fn read_guess(&mut self, _length: usize) -> io::Result<String> {
            self.guesses
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }

        fn notify(&mut self, event: &RoundEvent<'_>) {
            match event {
                RoundEvent::ModeRejected { mode } => self.rejected = Some((*mode).to_string()),
                RoundEvent::Turn {
                    attempts_remaining, ..
                } => self.turns.push(*attempts_remaining),
                RoundEvent::TimedOut { .. } => self.timeouts += 1,
                RoundEvent::Feedback(feedback) => self.feedback.push(feedback.to_string()),
                RoundEvent::Finished(round) => self.finished = Some((*round).clone()),
                RoundEvent::Started { .. } => {}
            }
        }
    }

    /// Clock returning `base + offset` for each scripted offset in turn
    struct ScriptedClock {
        base: Instant,
        offsets: RefCell<VecDeque<Duration>>,
    }

    impl ScriptedClock {
        fn new(offsets_secs: &[u64]) -> Self {
            Self {
                base: Instant::now(),
                offsets: RefCell::new(offsets_secs.iter().map(|&s| Duration::from_secs(s)).collect()),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now(&self) -> Instant {
            let offset = self.offsets.borrow_mut().pop_front().unwrap_or_default();
            self.base + offset
        }
    }

    fn options(length: usize, max_attempts: usize, mode: &str) -> PlayOptions {
        PlayOptions {
            player: "alice".to_string(),
            length,
            max_attempts,
            mode: mode.to_string(),
        }
    }

    #[test]
    fn first_guess_win_scores_2500() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST"]);

        let round = Game::new(&words, &log)
            .play(&options(4, 6, "standard"), &mut player)
            .unwrap()
            .unwrap();

        assert!(round.is_win);
        assert_eq!(round.tries, 1);
        assert_eq!(round.score, 2500);
        assert_eq!(round.word, "TEST");
        assert_eq!(round.player, "alice");
        assert_eq!(player.turns, vec![6]);
        assert!(player.feedback.is_empty());
        assert_eq!(log.rounds.borrow().as_slice(), &[round]);
    }

    #[test]
    fn six_misses_lose_with_zero_score() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player =
            ScriptedPlayer::new(&["AAAA", "BBBB", "CCCC", "DDDD", "EEEE", "FFFF", "TEST"]);

        let round = Game::new(&words, &log)
            .play(&options(4, 6, "standard"), &mut player)
            .unwrap()
            .unwrap();

        assert!(!round.is_win);
        assert_eq!(round.tries, 6);
        assert_eq!(round.score, 0);
        assert_eq!(player.turns, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(player.feedback.len(), 6);
        // The seventh guess is never requested
        assert_eq!(player.guesses, VecDeque::from(["TEST"]));
        assert_eq!(log.rounds.borrow().len(), 1);
    }

    #[test]
    fn misses_surface_feedback() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TSEX", "TEST"]);

        let round = Game::new(&words, &log)
            .play(&options(4, 6, "standard"), &mut player)
            .unwrap()
            .unwrap();

        assert_eq!(player.feedback, vec!["GYY-"]);
        assert_eq!(round.tries, 2);
        assert_eq!(round.score, 100 * 4 * 4 + 500);
        assert_eq!(player.finished, Some(round));
    }

    #[test]
    fn unsupported_mode_draws_and_records_nothing() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST"]);

        let result = Game::new(&words, &log)
            .play(&options(4, 6, "blitz"), &mut player)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(words.draws.get(), 0);
        assert!(log.rounds.borrow().is_empty());
        assert_eq!(player.rejected.as_deref(), Some("blitz"));
        assert!(player.turns.is_empty());
    }

    #[test]
    fn missing_word_length_is_distinct_error() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST"]);

        let result = Game::new(&words, &log).play(&options(9, 6, "standard"), &mut player);

        assert!(matches!(result, Err(GameError::WordNotFound { length: 9 })));
        assert!(log.rounds.borrow().is_empty());
        assert!(player.turns.is_empty());
    }

    #[test]
    fn zero_attempts_is_config_error() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&[]);

        let result = Game::new(&words, &log).play(&options(4, 0, "standard"), &mut player);

        assert!(matches!(
            result,
            Err(GameError::Config(ConfigError::ZeroAttempts))
        ));
        assert_eq!(words.draws.get(), 0);
    }

    #[test]
    fn late_guess_consumes_attempt_but_never_wins() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST", "TEST"]);
        // First guess: 0s -> 20s (late). Second guess: 20s -> 21s (in time).
        let clock = ScriptedClock::new(&[0, 20, 20, 21]);

        let round = Game::new(&words, &log)
            .with_clock(clock)
            .play(&options(4, 6, "timed"), &mut player)
            .unwrap()
            .unwrap();

        assert_eq!(player.timeouts, 1);
        assert!(round.is_win);
        assert_eq!(round.tries, 2);
        assert_eq!(round.mode, GameMode::Timed);
        assert_eq!(round.score, 100 * 4 * 4 + 500);
    }

    #[test]
    fn all_late_guesses_lose() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST", "TEST"]);
        let clock = ScriptedClock::new(&[0, 16, 16, 40]);

        let round = Game::new(&words, &log)
            .with_clock(clock)
            .play(&options(4, 2, "timed"), &mut player)
            .unwrap()
            .unwrap();

        assert!(!round.is_win);
        assert_eq!(round.tries, 2);
        assert_eq!(round.score, 0);
        assert_eq!(player.timeouts, 2);
        assert!(player.feedback.is_empty());
    }

    #[test]
    fn deadline_is_exclusive() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST"]);
        let clock = ScriptedClock::new(&[0, 15]);

        let round = Game::new(&words, &log)
            .with_clock(clock)
            .play(&options(4, 6, "timed"), &mut player)
            .unwrap()
            .unwrap();

        assert_eq!(player.timeouts, 0);
        assert!(round.is_win);
    }

    #[test]
    fn standard_mode_ignores_clock() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["TEST"]);
        let clock = ScriptedClock::new(&[0, 1000]);

        let round = Game::new(&words, &log)
            .with_clock(clock)
            .play(&options(4, 6, "standard"), &mut player)
            .unwrap()
            .unwrap();

        assert!(round.is_win);
        assert_eq!(player.timeouts, 0);
    }

    struct BrokenLog;

    impl RoundLog for BrokenLog {
        fn append(&self, _round: CompletedRound) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "stats.json".into(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }
    }

    #[test]
    fn result_shown_only_after_it_is_recorded() {
        let words = FixedWord::new("TEST");
        let mut player = ScriptedPlayer::new(&["TEST"]);

        let result = Game::new(&words, &BrokenLog).play(&options(4, 6, "standard"), &mut player);

        assert!(matches!(result, Err(GameError::Storage(_))));
        assert!(player.finished.is_none());
    }

    #[test]
    fn huge_attempt_budget_plays_normally() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["ABCD", "TEST"]);

        let round = Game::new(&words, &log)
            .play(&options(4, usize::MAX, "standard"), &mut player)
            .unwrap()
            .unwrap();

        assert!(round.is_win);
        assert_eq!(round.tries, 2);
        assert_eq!(player.turns, vec![usize::MAX, usize::MAX - 1]);
    }

    #[test]
    fn accept_options_rejects_mode_without_error() {
        let mut player = ScriptedPlayer::new(&[]);

        let accepted = accept_options(&options(4, 6, "blitz"), &mut player).unwrap();

        assert!(accepted.is_none());
        assert_eq!(player.rejected.as_deref(), Some("blitz"));
    }

    #[test]
    fn input_failure_records_nothing() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();
        let mut player = ScriptedPlayer::new(&["AAAA"]);

        let result = Game::new(&words, &log).play(&options(4, 6, "standard"), &mut player);

        assert!(matches!(result, Err(GameError::Input(_))));
        assert!(log.rounds.borrow().is_empty());
    }

    #[test]
    fn feedback_reports_marks_per_letter() {
        let words = FixedWord::new("TEST");
        let log = MemoryLog::default();

        struct MarkRecorder(Vec<Vec<Mark>>, VecDeque<&'static str>);
        impl Player for MarkRecorder {
            fn read_guess(&mut self, _length: usize) -> io::Result<String> {
                Ok(self.1.pop_front().unwrap_or("TEST").to_string())
            }
            fn notify(&mut self, event: &RoundEvent<'_>) {
                if let RoundEvent::Feedback(feedback) = event {
                    self.0.push(feedback.marks().collect());
                }
            }
        }

        let mut player = MarkRecorder(Vec::new(), VecDeque::from(["SETT"]));
        Game::new(&words, &log)
            .play(&options(4, 6, "standard"), &mut player)
            .unwrap();

        assert_eq!(
            player.0,
            vec![vec![Mark::Present, Mark::Exact, Mark::Present, Mark::Exact]]
        );
    }
}
