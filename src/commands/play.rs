//! Interactive play command
//!
//! Reads guesses from a terminal and prints round events as they happen.

use crate::core::PlayOptions;
use crate::error::GameError;
use crate::output::describe_event;
use crate::round::{Game, Player, RoundEvent, accept_options};
use crate::storage::{CompletedRound, Dictionary, HistoryStore, STATS_FILE, WORDS_FILE};
use log::warn;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

/// Player driven by line-based terminal input
///
/// Guesses of the wrong length are refused and asked for again without
/// using up an attempt.
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
}

impl TerminalPlayer<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn read_guess(&mut self, length: usize) -> io::Result<String> {
        loop {
            write!(self.output, "Enter a word: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the round ended",
                ));
            }

            let guess = line.trim();
            let count = guess.chars().count();
            if count == length {
                return Ok(guess.to_string());
            }
            writeln!(
                self.output,
                "The word must have {length} letters, yours has {count}."
            )?;
        }
    }

    fn notify(&mut self, event: &RoundEvent<'_>) {
        if let Err(e) = writeln!(self.output, "{}", describe_event(event)) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

/// Play one round against the word list and history in `data_dir`
///
/// # Errors
///
/// Returns an error if the data files cannot be accessed, no word of the
/// requested length exists, or input fails.
pub fn run_play(
    data_dir: &Path,
    options: &PlayOptions,
) -> Result<Option<CompletedRound>, GameError> {
    play_in(data_dir, options, &mut TerminalPlayer::stdio())
}

/// Play one round in `data_dir` with any player
///
/// Options are validated before the data files are opened, so a rejected
/// mode leaves the directory untouched.
///
/// # Errors
///
/// Same as [`run_play`].
pub fn play_in<P: Player + ?Sized>(
    data_dir: &Path,
    options: &PlayOptions,
    player: &mut P,
) -> Result<Option<CompletedRound>, GameError> {
    let Some(config) = accept_options(options, player)? else {
        return Ok(None);
    };

    let dictionary = Dictionary::open(data_dir.join(WORDS_FILE))?;
    let history = HistoryStore::new(data_dir.join(STATS_FILE));

    Game::new(&dictionary, &history)
        .play_round(&config, player)
        .map(Some)
}
