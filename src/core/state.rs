//! Round status and the operations each status permits.
//!
//! A round moves strictly forward: `NotStarted -> InProgress -> {Won, Lost}`.
//! The table of which engine operation is legal in which status lives here
//! as data, so the engine asks [`RoundStatus::permits`] instead of
//! scattering status checks through game logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a round.
///
/// # Example
///
/// ```rust
/// use hangman::core::{Operation, RoundStatus};
///
/// assert!(RoundStatus::InProgress.permits(Operation::SubmitGuess));
/// assert!(!RoundStatus::Won.permits(Operation::SubmitGuess));
/// assert!(RoundStatus::Lost.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No round has been started yet.
    #[default]
    NotStarted,
    /// Guesses are being accepted.
    InProgress,
    /// Every letter of the secret word was revealed.
    Won,
    /// The guess budget ran out with letters still hidden.
    Lost,
}

/// State-changing operations a caller can invoke on the engine.
///
/// Reading a snapshot changes nothing and is allowed in every status.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    StartRound,
    SubmitGuess,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartRound => "start a round",
            Self::SubmitGuess => "submit a guess",
        })
    }
}

impl RoundStatus {
    /// Name of the status for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Check if this is a terminal status.
    ///
    /// Terminal statuses are only left by starting a fresh round.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether `op` may be invoked while the round is in this status.
    pub fn permits(&self, op: Operation) -> bool {
        match (self, op) {
            (Self::InProgress, Operation::SubmitGuess) => true,
            (_, Operation::SubmitGuess) => false,
            // Starting over mid-round abandons the current round.
            (_, Operation::StartRound) => true,
        }
    }

    /// Whether moving from `self` to `next` goes forward in the lifecycle.
    pub fn can_advance_to(&self, next: RoundStatus) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::InProgress)
                | (Self::InProgress, Self::Won)
                | (Self::InProgress, Self::Lost)
        )
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
