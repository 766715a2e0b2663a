//! Wordle - CLI
//!
//! Play Wordle rounds in the terminal and keep statistics across sessions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::debug;
use std::path::{Path, PathBuf};
use wordle_cli::{
    commands::{add_word, collect_stats, list_words, reset_stats, run_play},
    core::PlayOptions,
    output::{clear_screen, print_history, print_stats, print_words},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal, with a timed mode and statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding words.json and stats.json
    #[arg(short = 'd', long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game (default)
    Play(PlayArgs),

    /// Show player statistics
    Stats {
        /// Also list every recorded game
        #[arg(short, long)]
        all: bool,
    },

    /// Delete all recorded games
    Reset,

    /// Manage the word list
    Word {
        #[command(subcommand)]
        action: WordCommand,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Length of the word to guess
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Maximum number of tries
    #[arg(short, long, default_value_t = 6)]
    tries: usize,

    /// Player name
    #[arg(short, long, default_value = "default")]
    user: String,

    /// Game mode: standard or timed
    #[arg(short, long, default_value = "standard")]
    gamemode: String,
}

impl Default for PlayArgs {
    fn default() -> Self {
        let defaults = PlayOptions::default();
        Self {
            length: defaults.length,
            tries: defaults.max_attempts,
            user: defaults.player,
            gamemode: defaults.mode,
        }
    }
}

impl From<PlayArgs> for PlayOptions {
    fn from(args: PlayArgs) -> Self {
        Self {
            player: args.user,
            length: args.length,
            max_attempts: args.tries,
            mode: args.gamemode,
        }
    }
}

#[derive(Subcommand)]
enum WordCommand {
    /// Add a new word
    Add {
        /// The word to add
        word: String,
    },

    /// List known words
    List {
        /// Only words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Data directory: {}", cli.data_dir.display());

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(&cli.data_dir, args.into()),
        Commands::Stats { all } => run_stats_command(&cli.data_dir, all),
        Commands::Reset => run_reset_command(&cli.data_dir),
        Commands::Word { action } => run_word_command(&cli.data_dir, action),
    }
}

fn run_play_command(data_dir: &Path, options: PlayOptions) -> Result<()> {
    clear_screen()?;
    run_play(data_dir, &options)?;
    Ok(())
}

fn run_stats_command(data_dir: &Path, all: bool) -> Result<()> {
    let report = collect_stats(data_dir, all)?;

    clear_screen()?;
    print_stats(&report.stats);
    if let Some(rounds) = report.rounds {
        print_history(&rounds);
    }
    Ok(())
}

fn run_reset_command(data_dir: &Path) -> Result<()> {
    if reset_stats(data_dir)? {
        println!("{}", "Statistics cleared.".green());
    } else {
        println!("No statistics to clear.");
    }
    Ok(())
}

fn run_word_command(data_dir: &Path, action: WordCommand) -> Result<()> {
    match action {
        WordCommand::Add { word } => {
            println!("Adding word: {word}");
            if add_word(data_dir, &word)? {
                println!("{}", "✓ Word added".green());
            } else {
                println!("{}", "Word already present or empty, nothing added".yellow());
            }
        }
        WordCommand::List { length } => {
            let words = list_words(data_dir, length)?;
            print_words(words.iter().map(String::as_str));
        }
    }
    Ok(())
}
