//! Game rule errors.

use super::state::{Operation, RoundStatus};
use thiserror::Error;

/// Rejections produced by the state machine.
///
/// None of these are fatal: each one leaves the round exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The secret word is empty or uses letters outside the alphabet.
    #[error("invalid secret word {word:?}: {reason}")]
    InvalidWord { word: String, reason: InvalidWordReason },

    /// A guess arrived while no round is in progress.
    #[error("no round in progress (status: {status})")]
    RoundNotActive { status: RoundStatus },

    /// The status table refuses the operation.
    #[error("cannot {operation} while the round is {status}")]
    NotPermitted {
        operation: Operation,
        status: RoundStatus,
    },

    /// The guess is not exactly one letter of the alphabet.
    #[error("guess {input:?} is not a single accepted letter")]
    InvalidGuessFormat { input: String },

    /// The letter was already guessed this round.
    #[error("letter '{letter}' was already guessed")]
    DuplicateGuess { letter: char },
}

/// Why a secret word was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidWordReason {
    #[error("word is empty")]
    Empty,

    #[error("'{0}' is not in the accepted alphabet")]
    DisallowedLetter(char),
}
