//! Command-line interface for the hangman binary.

use clap::{Parser, Subcommand, ValueEnum};
use hangman::core::AlphabetKind;
use std::path::PathBuf;

/// Hangman - guess the word one letter at a time
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Play hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game rules
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Wrong guesses allowed per round (overrides the config file)
    #[arg(long, global = true)]
    pub max_guesses: Option<u32>,

    /// Accepted alphabet (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub alphabet: Option<AlphabetArg>,

    /// Print each board as a JSON line instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// How many times to ask the word source before giving up
    #[arg(long, global = true, default_value = "1")]
    pub fetch_attempts: u32,

    /// Where secret words come from
    #[command(subcommand)]
    pub command: Command,
}

/// Word sources
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick random words from a list
    List {
        /// File with one word per line; the built-in list is used otherwise
        #[arg(long)]
        words_file: Option<PathBuf>,

        /// Seed for reproducible word picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fetch words from an HTTP word service
    Remote {
        /// Endpoint returning a JSON array of words
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout_secs: u64,
    },

    /// Play a single round with a word chosen by another player
    Word {
        /// The secret word
        word: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlphabetArg {
    English,
    Swedish,
}

impl From<AlphabetArg> for AlphabetKind {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::English => AlphabetKind::English,
            AlphabetArg::Swedish => AlphabetKind::Swedish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "hangman",
            "list",
            "--seed",
            "3",
            "--max-guesses",
            "8",
            "--alphabet",
            "swedish",
        ])
        .unwrap();

        assert_eq!(cli.max_guesses, Some(8));
        assert!(matches!(cli.alphabet, Some(AlphabetArg::Swedish)));
        assert_eq!(cli.fetch_attempts, 1);
        assert!(matches!(cli.command, Command::List { seed: Some(3), .. }));
    }

    #[test]
    fn word_requires_argument() {
        assert!(Cli::try_parse_from(["hangman", "word"]).is_err());
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
