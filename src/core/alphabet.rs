//! Accepted letter sets.
//!
//! The alphabet decides which characters may appear in a secret word and
//! which single characters count as a well-formed guess. Locale variants
//! are plain values handed to the engine, never branches in game logic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Extra letters of the Swedish alphabet beyond `A`-`Z`.
pub const SWEDISH_EXTRAS: [char; 3] = ['Å', 'Ä', 'Ö'];

/// Named alphabet presets, as they appear in configuration files.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    #[default]
    English,
    Swedish,
}

/// A set of accepted uppercase letters.
///
/// # Example
///
/// ```rust
/// use hangman::core::Alphabet;
///
/// let english = Alphabet::english();
/// assert!(english.contains('Q'));
/// assert!(!english.contains('Å'));
///
/// let swedish = Alphabet::swedish();
/// assert!(swedish.contains('Å'));
/// assert_eq!(swedish.len(), 29);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Alphabet {
    letters: BTreeSet<char>,
}

impl Alphabet {
    /// `A` through `Z`.
    pub fn english() -> Self {
        Self {
            letters: ('A'..='Z').collect(),
        }
    }

    /// `A` through `Z` plus `Å`, `Ä`, `Ö`.
    pub fn swedish() -> Self {
        Self::english().with_extra(SWEDISH_EXTRAS)
    }

    /// Alphabet for a configuration preset.
    pub fn from_kind(kind: AlphabetKind) -> Self {
        match kind {
            AlphabetKind::English => Self::english(),
            AlphabetKind::Swedish => Self::swedish(),
        }
    }

    /// Extend with additional letters. Letters already present are ignored.
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.letters.extend(extra);
        self
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_twenty_six_letters() {
        let alphabet = Alphabet::english();
        assert_eq!(alphabet.len(), 26);
        assert!(('A'..='Z').all(|c| alphabet.contains(c)));
    }

    #[test]
    fn english_rejects_lowercase_and_digits() {
        let alphabet = Alphabet::english();
        assert!(!alphabet.contains('a'));
        assert!(!alphabet.contains('5'));
        assert!(!alphabet.contains(' '));
    }

    #[test]
    fn swedish_extends_english() {
        let swedish = Alphabet::swedish();
        for letter in 'A'..='Z' {
            assert!(swedish.contains(letter));
        }
        for letter in SWEDISH_EXTRAS {
            assert!(swedish.contains(letter));
        }
    }

    #[test]
    fn with_extra_ignores_duplicates() {
        let alphabet = Alphabet::english().with_extra(['A', 'Ñ', 'Ñ']);
        assert_eq!(alphabet.len(), 27);
        assert!(alphabet.contains('Ñ'));
    }

    #[test]
    fn from_kind_matches_presets() {
        assert_eq!(Alphabet::from_kind(AlphabetKind::English), Alphabet::english());
        assert_eq!(Alphabet::from_kind(AlphabetKind::Swedish), Alphabet::swedish());
    }

    #[test]
    fn kind_deserializes_from_lowercase() {
        let kind: AlphabetKind = serde_json::from_str("\"swedish\"").unwrap();
        assert_eq!(kind, AlphabetKind::Swedish);
    }
}
