//! Configuration violations.

use thiserror::Error;

/// A single problem found while validating a [`super::GameConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("max_guesses must be at least 1")]
    ZeroGuessLimit,

    #[error("extra letter '{letter}' is not an uppercase letter")]
    InvalidExtraLetter { letter: char },

    #[error("extra letter '{letter}' is already in the alphabet")]
    DuplicateLetter { letter: char },
}
