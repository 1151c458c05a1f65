//! Hangman - terminal front end
//!
//! Reads one guess per line from stdin and redraws the board after each.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hangman::config::GameConfig;
use hangman::core::{GameError, GuessOutcome, RoundEnding, RoundView};
use hangman::engine::GameEngine;
use hangman::logging::init_logging;
use hangman::provider::{FixedWord, WordList, WordProvider};
use hangman::session::{Session, SessionError};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

const QUIT: &str = ":q";

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let engine = build_engine(&cli)?;
    let replay = !matches!(cli.command, Command::Word { .. });
    let provider = build_provider(cli.command)?;
    info!(provider = provider.name(), max_guesses = engine.max_guesses(), "starting hangman");

    let mut session = Session::new(provider, engine);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let options = PlayOptions {
        json: cli.json,
        fetch_attempts: cli.fetch_attempts.max(1),
        replay,
    };

    play(&mut session, &mut input, &options).await
}

struct PlayOptions {
    json: bool,
    fetch_attempts: u32,
    replay: bool,
}

fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(max) = cli.max_guesses {
        config.max_guesses = max;
    }
    if let Some(alphabet) = cli.alphabet {
        config.alphabet = alphabet.into();
    }
    debug!(?config, "effective configuration");

    Ok(GameEngine::new(config)?)
}

fn build_provider(command: Command) -> Result<Box<dyn WordProvider>> {
    let provider: Box<dyn WordProvider> = match command {
        Command::List { words_file, seed } => {
            let list = match words_file {
                Some(path) => WordList::from_file(&path)
                    .with_context(|| format!("could not load words from {}", path.display()))?,
                None => WordList::builtin(),
            };
            Box::new(match seed {
                Some(seed) => list.with_seed(seed),
                None => list,
            })
        }
        Command::Remote { url, timeout_secs } => remote_provider(url, timeout_secs)?,
        Command::Word { word } => Box::new(FixedWord::new(word)),
    };
    Ok(provider)
}

#[cfg(feature = "remote")]
fn remote_provider(url: Option<String>, timeout_secs: u64) -> Result<Box<dyn WordProvider>> {
    use hangman::provider::RemoteWordApi;
    use std::time::Duration;

    let timeout = Duration::from_secs(timeout_secs);
    let api = match url {
        Some(url) => RemoteWordApi::new(url, timeout)?,
        None => RemoteWordApi::with_default_url(timeout)?,
    };
    Ok(Box::new(api))
}

#[cfg(not(feature = "remote"))]
fn remote_provider(_url: Option<String>, _timeout_secs: u64) -> Result<Box<dyn WordProvider>> {
    anyhow::bail!("this build of hangman has no remote word support (feature `remote`)")
}

async fn play<P: WordProvider>(
    session: &mut Session<P>,
    input: &mut Input,
    options: &PlayOptions,
) -> Result<()> {
    loop {
        if !start_round(session, input, options.fetch_attempts).await? {
            return Ok(());
        }
        render(&session.snapshot(), options.json)?;

        if !play_round(session, input, options.json).await? {
            return Ok(());
        }
        if !options.replay {
            return Ok(());
        }

        println!("Play again? [y/N]");
        match input.next_line().await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
    }
}

/// Start a round, letting the player try again when no word could be
/// fetched. Returns `false` if the player gave up.
async fn start_round<P: WordProvider>(
    session: &mut Session<P>,
    input: &mut Input,
    attempts: u32,
) -> Result<bool> {
    loop {
        match session.new_round_retrying(attempts).await {
            Ok(_) => return Ok(true),
            Err(SessionError::Provider(err)) => {
                println!("Error fetching a word ({err}). Press Enter to try again, or {QUIT} to quit.");
                match input.next_line().await? {
                    Some(line) if line.trim() != QUIT => {}
                    _ => return Ok(false),
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Play until the round ends. Returns `false` if the player quit.
async fn play_round<P: WordProvider>(
    session: &mut Session<P>,
    input: &mut Input,
    json: bool,
) -> Result<bool> {
    while let Some(line) = input.next_line().await? {
        let line = line.trim();
        if line == QUIT {
            return Ok(false);
        }
        if line.is_empty() {
            continue;
        }

        match session.guess(line) {
            Ok(outcome) => {
                println!("{}", describe_outcome(&outcome));
                render(&session.snapshot(), json)?;
                if let Some(ending) = &outcome.ending {
                    println!("{}", describe_ending(ending));
                    return Ok(true);
                }
            }
            Err(err) => println!("{}", describe_error(&err)),
        }
    }
    Ok(false)
}

fn render(view: &RoundView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }

    let guessed: Vec<String> = view.guessed_letters.iter().map(char::to_string).collect();
    println!();
    println!("  {}", view.masked_word);
    println!(
        "  guesses left: {}/{}   guessed: {}",
        view.remaining_guesses,
        view.max_guesses,
        guessed.join(" ")
    );
    Ok(())
}

fn describe_outcome(outcome: &GuessOutcome) -> String {
    if outcome.is_hit() {
        format!("'{}' is in the word.", outcome.letter)
    } else {
        format!("No '{}' in the word.", outcome.letter)
    }
}

fn describe_ending(ending: &RoundEnding) -> String {
    match ending {
        RoundEnding::Won { word } => format!("You won! The word was {word}."),
        RoundEnding::Lost { word } => format!("Out of guesses. The word was {word}."),
    }
}

fn describe_error(err: &GameError) -> String {
    match err {
        GameError::InvalidGuessFormat { .. } => "Type a single letter.".to_string(),
        GameError::DuplicateGuess { letter } => format!("You already guessed '{letter}'."),
        other => other.to_string(),
    }
}
