//! Game configuration.
//!
//! A [`GameConfig`] describes the rules a deployment plays by: how many
//! wrong guesses are allowed and which letters are accepted. It can be
//! read from a TOML file and is validated with stillwater's `Validation`
//! so every problem is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use hangman::config::GameConfig;
//! use hangman::core::AlphabetKind;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     max_guesses = 8
//!     alphabet = "swedish"
//! "#).unwrap();
//!
//! assert_eq!(config.max_guesses, 8);
//! assert_eq!(config.alphabet, AlphabetKind::Swedish);
//! assert!(config.validate().is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::ConfigValidation;
pub use violations::ConfigViolation;

use crate::core::{Alphabet, AlphabetKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Guess budget used when nothing else is configured.
pub const DEFAULT_MAX_GUESSES: u32 = 6;

/// Rules for a game deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Wrong guesses allowed per round
    pub max_guesses: u32,
    /// Base alphabet preset
    pub alphabet: AlphabetKind,
    /// Letters accepted in addition to the preset
    pub extra_letters: Vec<char>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            alphabet: AlphabetKind::English,
            extra_letters: Vec::new(),
        }
    }
}

/// Errors loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl GameConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> ConfigValidation {
        rules::validate(self)
    }

    /// The accepted alphabet: the preset plus any extra letters.
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_kind(self.alphabet).with_extra(self.extra_letters.iter().copied())
    }
}
