//! Builder for constructing game engines.

use crate::builder::error::BuildError;
use crate::config::{rules, GameConfig};
use crate::core::AlphabetKind;
use crate::engine::GameEngine;
use std::num::NonZeroU32;

/// Builder for [`GameEngine`] with a fluent API.
///
/// Starts from [`GameConfig::default`]; each setter overrides one field.
/// Nothing is checked until [`EngineBuilder::build`], which reports every
/// problem at once.
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: GameConfig,
}

impl EngineBuilder {
    /// Create a new builder with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the wrong-guess budget per round.
    pub fn max_guesses(mut self, n: u32) -> Self {
        self.config.max_guesses = n;
        self
    }

    /// Set the base alphabet preset.
    pub fn alphabet(mut self, kind: AlphabetKind) -> Self {
        self.config.alphabet = kind;
        self
    }

    /// Accept an additional letter.
    pub fn extra_letter(mut self, letter: char) -> Self {
        self.config.extra_letters.push(letter);
        self
    }

    /// Validate the settings and build the engine.
    pub fn build(self) -> Result<GameEngine, BuildError> {
        let violations = rules::violations(self.config.validate());
        let max_guesses = match NonZeroU32::new(self.config.max_guesses) {
            Some(n) if violations.is_empty() => n,
            _ => return Err(BuildError::InvalidConfig { violations }),
        };

        Ok(GameEngine::from_parts(max_guesses, self.config.alphabet()))
    }
}
