//! Engine holding the rules and the active round.

use crate::builder::{BuildError, EngineBuilder};
use crate::config::{GameConfig, DEFAULT_MAX_GUESSES};
use crate::core::{Alphabet, GameError, GuessOutcome, Operation, Round, RoundStatus, RoundView};
use std::num::NonZeroU32;
use tracing::debug;

/// Game engine owning the rules and the current round.
///
/// # Example
///
/// ```rust
/// use hangman::engine::GameEngine;
/// use hangman::core::{RoundStatus, Verdict};
///
/// let mut engine = GameEngine::default();
/// assert_eq!(engine.snapshot().status, RoundStatus::NotStarted);
///
/// engine.start_round("dog").unwrap();
/// let outcome = engine.submit_guess("d").unwrap();
/// assert_eq!(outcome.verdict, Verdict::Hit);
///
/// let view = engine.snapshot();
/// assert_eq!(view.masked_word, "D _ _");
/// assert_eq!(view.remaining_guesses, 6);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    max_guesses: NonZeroU32,
    alphabet: Alphabet,
    round: Option<Round>,
}

impl GameEngine {
    /// Build an engine from a configuration, validating it first.
    pub fn new(config: GameConfig) -> Result<Self, BuildError> {
        EngineBuilder::new().config(config).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(max_guesses: NonZeroU32, alphabet: Alphabet) -> Self {
        Self {
            max_guesses,
            alphabet,
            round: None,
        }
    }

    /// Start a fresh round with `word`, replacing any current round.
    ///
    /// On error the previous round, if any, is kept as it was.
    pub fn start_round(&mut self, word: &str) -> Result<&Round, GameError> {
        let status = self.status();
        if !status.permits(Operation::StartRound) {
            return Err(GameError::NotPermitted {
                operation: Operation::StartRound,
                status,
            });
        }

        let round = Round::start(word, self.max_guesses, &self.alphabet)?;

        if let Some(previous) = self.round.as_ref().filter(|r| !r.status().is_final()) {
            debug!(round_id = %previous.id(), "abandoning round in progress");
        }

        Ok(&*self.round.insert(round))
    }

    /// Submit a raw guess to the current round.
    ///
    /// Fails with [`GameError::RoundNotActive`] when no round was started.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        match self.round.as_mut() {
            Some(round) => round.submit_guess(input),
            None => Err(GameError::RoundNotActive {
                status: RoundStatus::NotStarted,
            }),
        }
    }

    /// Current view for rendering.
    pub fn snapshot(&self) -> RoundView {
        self.round
            .as_ref()
            .map(Round::snapshot)
            .unwrap_or_else(|| RoundView::not_started(self.max_guesses.get()))
    }

    pub fn status(&self) -> RoundStatus {
        self.round
            .as_ref()
            .map_or(RoundStatus::NotStarted, Round::status)
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses.get()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        let max_guesses = NonZeroU32::new(DEFAULT_MAX_GUESSES).unwrap_or(NonZeroU32::MIN);
        Self::from_parts(max_guesses, Alphabet::english())
    }
}
