//! Plays a scripted round against a seeded word list.
//!
//! Run with: `cargo run --example scripted_round`

use hangman::engine::GameEngine;
use hangman::provider::WordList;
use hangman::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hangman::logging::init_logging();

    let words = WordList::new(["RUST", "CRATE", "TRAIT"])?.with_seed(2024);
    let engine = GameEngine::builder().max_guesses(4).build()?;
    let mut session = Session::new(words, engine);

    let round = session.new_round().await?;
    println!("round {} ({} letters)", round.id(), round.word_len());

    for guess in ["E", "T", "R", "A", "S", "U", "C", "I"] {
        match session.guess(guess) {
            Ok(outcome) => {
                let view = session.snapshot();
                println!(
                    "{guess}: {:?}  {}  ({} left)",
                    outcome.verdict, view.masked_word, view.remaining_guesses
                );
                if let Some(ending) = outcome.ending {
                    println!("{:?}: {}", ending.status(), ending.word());
                    break;
                }
            }
            Err(err) => println!("{guess}: {err}"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
