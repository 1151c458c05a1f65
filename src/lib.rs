//! Hangman: a pure state machine for the letter-guessing word game
//!
//! The game logic is a small pure core with no I/O: a [`Round`] holds
//! the secret word, the letters guessed so far and the remaining guess
//! budget, and moves strictly forward from `InProgress` to `Won` or
//! `Lost`. Everything around it (where words come from, how the board
//! is drawn) plugs in from outside.
//!
//! # Core Concepts
//!
//! - **Engine**: [`GameEngine`] owns the rules and the current round
//! - **Round**: one playthrough with typed outcomes for every guess
//! - **Alphabet**: accepted letters, English by default, extensible
//! - **Providers**: [`WordProvider`] sources for secret words
//! - **Config**: TOML-loadable rules validated all at once
//!
//! # Example
//!
//! ```rust
//! use hangman::core::{GameError, RoundStatus, Verdict};
//! use hangman::engine::GameEngine;
//!
//! let mut engine = GameEngine::builder().max_guesses(6).build().unwrap();
//! engine.start_round("cat").unwrap();
//!
//! assert_eq!(engine.submit_guess("c").unwrap().verdict, Verdict::Hit);
//! assert_eq!(engine.submit_guess("x").unwrap().verdict, Verdict::Miss);
//! assert_eq!(
//!     engine.submit_guess("C"),
//!     Err(GameError::DuplicateGuess { letter: 'C' })
//! );
//!
//! engine.submit_guess("a").unwrap();
//! let outcome = engine.submit_guess("t").unwrap();
//! assert!(outcome.ended_round());
//!
//! let view = engine.snapshot();
//! assert_eq!(view.status, RoundStatus::Won);
//! assert_eq!(view.masked_word, "C A T");
//! assert_eq!(view.remaining_guesses, 5);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod logging;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use crate::builder::{BuildError, EngineBuilder};
pub use crate::config::GameConfig;
pub use crate::core::{
    Alphabet, GameError, GuessOutcome, Round, RoundEnding, RoundStatus, RoundView, Verdict,
};
pub use crate::engine::GameEngine;
pub use crate::provider::{ProviderError, WordProvider};
pub use crate::session::{Session, SessionError};
