//! A provider and an engine wired together.
//!
//! [`Session`] is the thin imperative shell around the pure engine: it
//! awaits a word from its provider, then hands the word to the engine.
//! A failed fetch starts nothing and leaves the current round alone.

use crate::core::{GameError, GuessOutcome, Round, RoundView};
use crate::engine::GameEngine;
use crate::provider::{ProviderError, WordProvider};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors starting a round through a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not obtain a word: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Drives one engine with words from one provider.
pub struct Session<P> {
    provider: P,
    engine: GameEngine,
}

impl<P: WordProvider> Session<P> {
    pub fn new(provider: P, engine: GameEngine) -> Self {
        Self { provider, engine }
    }

    /// Fetch a word and start a round with it.
    pub async fn new_round(&mut self) -> Result<&Round, SessionError> {
        self.new_round_retrying(1).await
    }

    /// Like [`Session::new_round`], asking the provider up to `attempts`
    /// times. Only provider failures are retried; a word the engine
    /// rejects is returned as [`SessionError::Game`] at once. An
    /// `attempts` of zero is treated as one.
    pub async fn new_round_retrying(&mut self, attempts: u32) -> Result<&Round, SessionError> {
        let attempts = attempts.max(1);
        let mut attempt = 1;

        let word = loop {
            match self.provider.fetch_word().await {
                Ok(word) => break word,
                Err(err) if attempt < attempts => {
                    debug!(provider = self.provider.name(), attempt, error = %err, "retrying word fetch");
                    attempt += 1;
                }
                Err(err) => {
                    warn!(provider = self.provider.name(), attempts, error = %err, "could not obtain a word");
                    return Err(err.into());
                }
            }
        };

        let round = self.engine.start_round(&word).inspect_err(|err| {
            warn!(provider = self.provider.name(), error = %err, "provider word rejected");
        })?;
        info!(provider = self.provider.name(), round_id = %round.id(), "new round");
        Ok(round)
    }

    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        self.engine.submit_guess(input)
    }

    pub fn snapshot(&self) -> RoundView {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_parts(self) -> (P, GameEngine) {
        (self.provider, self.engine)
    }
}
