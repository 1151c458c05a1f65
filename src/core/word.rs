//! Input normalization, the secret word, and guess parsing.

use super::alphabet::Alphabet;
use super::error::{GameError, InvalidWordReason};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a letter that has not been revealed.
pub const BLANK: char = '_';

/// Trim surrounding whitespace and uppercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A validated, normalized secret word.
///
/// # Example
///
/// ```rust
/// use hangman::core::{Alphabet, SecretWord};
///
/// let word = SecretWord::parse("  rust ", &Alphabet::english()).unwrap();
/// assert_eq!(word.to_string(), "RUST");
/// assert_eq!(word.mask(&['R', 'T']), "R _ _ T");
///
/// assert!(SecretWord::parse("", &Alphabet::english()).is_err());
/// assert!(SecretWord::parse("r2d2", &Alphabet::english()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SecretWord(Vec<char>);

impl SecretWord {
    /// Normalize `raw` and check every letter against `alphabet`.
    pub fn parse(raw: &str, alphabet: &Alphabet) -> Result<Self, GameError> {
        let normalized = normalize(raw);
        let reject = |reason| GameError::InvalidWord {
            word: raw.to_string(),
            reason,
        };

        if normalized.is_empty() {
            return Err(reject(InvalidWordReason::Empty));
        }
        if let Some(bad) = normalized.chars().find(|c| !alphabet.contains(*c)) {
            return Err(reject(InvalidWordReason::DisallowedLetter(bad)));
        }

        Ok(Self(normalized.chars().collect()))
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Number of letters, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    /// Whether every letter of the word is in `guessed`.
    pub fn is_revealed_by(&self, guessed: &[char]) -> bool {
        self.0.iter().all(|c| guessed.contains(c))
    }

    /// Space-joined letters with unguessed ones shown as `_`.
    pub fn mask(&self, guessed: &[char]) -> String {
        let shown: Vec<String> = self
            .0
            .iter()
            .map(|c| {
                let shown = if guessed.contains(c) { *c } else { BLANK };
                shown.to_string()
            })
            .collect();
        shown.join(" ")
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Normalize a raw guess and reduce it to one accepted letter.
pub fn parse_guess(raw: &str, alphabet: &Alphabet) -> Result<char, GameError> {
    let normalized = normalize(raw);
    let mut chars = normalized.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) if alphabet.contains(letter) => Ok(letter),
        _ => Err(GameError::InvalidGuessFormat {
            input: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  cat\n"), "CAT");
        assert_eq!(normalize("åsna"), "ÅSNA");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn parse_rejects_empty_word() {
        let err = SecretWord::parse("  ", &Alphabet::english()).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidWord {
                reason: InvalidWordReason::Empty,
                ..
            }
        ));
    }

    #[test]
    fn parse_reports_first_disallowed_letter() {
        let err = SecretWord::parse("ice cream", &Alphabet::english()).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidWord {
                reason: InvalidWordReason::DisallowedLetter(' '),
                ..
            }
        ));
    }

    #[test]
    fn parse_accepts_locale_letters_when_configured() {
        assert!(SecretWord::parse("björn", &Alphabet::english()).is_err());
        let word = SecretWord::parse("björn", &Alphabet::swedish()).unwrap();
        assert_eq!(word.to_string(), "BJÖRN");
    }

    #[test]
    fn mask_reveals_every_occurrence() {
        let word = SecretWord::parse("banana", &Alphabet::english()).unwrap();
        assert_eq!(word.mask(&[]), "_ _ _ _ _ _");
        assert_eq!(word.mask(&['A']), "_ A _ A _ A");
        assert_eq!(word.mask(&['A', 'N', 'B']), "B A N A N A");
    }

    #[test]
    fn is_revealed_by_requires_all_letters() {
        let word = SecretWord::parse("dog", &Alphabet::english()).unwrap();
        assert!(!word.is_revealed_by(&['D', 'O']));
        assert!(word.is_revealed_by(&['G', 'X', 'O', 'D']));
    }

    #[test]
    fn parse_guess_normalizes_single_letter() {
        let alphabet = Alphabet::english();
        assert_eq!(parse_guess("d", &alphabet), Ok('D'));
        assert_eq!(parse_guess("  q \n", &alphabet), Ok('Q'));
    }

    #[test]
    fn parse_guess_rejects_malformed_input() {
        let alphabet = Alphabet::english();
        for input in ["", "  ", "ab", "5", "?", "å"] {
            assert_eq!(
                parse_guess(input, &alphabet),
                Err(GameError::InvalidGuessFormat {
                    input: input.to_string()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_guess_accepts_extra_letters() {
        assert_eq!(parse_guess("ö", &Alphabet::swedish()), Ok('Ö'));
    }
}
