//! Core game state machine.
//!
//! This module contains the pure core of the game:
//! - Round status and the operations each status permits
//! - Alphabets, secret words and guess parsing
//! - The `Round` entity and its transitions
//! - Status history tracking
//!
//! Nothing in this module performs I/O. Words arrive as plain strings;
//! where they come from is the concern of [`crate::provider`].

mod alphabet;
mod error;
mod history;
mod outcome;
mod round;
mod state;
mod word;

pub use alphabet::{Alphabet, AlphabetKind, SWEDISH_EXTRAS};
pub use error::{GameError, InvalidWordReason};
pub use history::{StatusChange, StatusHistory};
pub use outcome::{GuessOutcome, RoundEnding, RoundView, Verdict};
pub use round::Round;
pub use state::{Operation, RoundStatus};
pub use word::{normalize, parse_guess, SecretWord, BLANK};
