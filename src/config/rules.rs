//! Validation rules for game configuration.
//!
//! Every rule runs on every call and all failures are reported together,
//! so a user fixing a config file sees the whole list at once.

use super::violations::ConfigViolation;
use super::GameConfig;
use crate::core::Alphabet;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of running every rule against a config.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run all rules, accumulating ALL violations.
pub fn validate(config: &GameConfig) -> ConfigValidation {
    let mut checks: Vec<ConfigValidation> = vec![check_guess_limit(config.max_guesses)];

    let base = Alphabet::from_kind(config.alphabet);
    let mut seen = BTreeSet::new();
    for &letter in &config.extra_letters {
        checks.push(check_extra_letter(letter, &base, &mut seen));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a validation into a plain list of violations.
pub fn violations(validation: ConfigValidation) -> Vec<ConfigViolation> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_guess_limit(max_guesses: u32) -> ConfigValidation {
    if max_guesses == 0 {
        Validation::fail(ConfigViolation::ZeroGuessLimit)
    } else {
        Validation::success(())
    }
}

fn check_extra_letter(
    letter: char,
    base: &Alphabet,
    seen: &mut BTreeSet<char>,
) -> ConfigValidation {
    if !letter.is_uppercase() {
        Validation::fail(ConfigViolation::InvalidExtraLetter { letter })
    } else if base.contains(letter) || !seen.insert(letter) {
        Validation::fail(ConfigViolation::DuplicateLetter { letter })
    } else {
        Validation::success(())
    }
}
