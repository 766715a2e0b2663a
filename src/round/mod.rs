//! Game round orchestration
//!
//! The controller owns the round state; guesses, time and storage are
//! injected so rounds can be played from a terminal or from tests.

mod controller;
mod player;
mod state;

pub use controller::{Game, accept_options};
pub use player::{Clock, Player, RoundEvent, SystemClock};
pub use state::{GuessOutcome, RoundState};
