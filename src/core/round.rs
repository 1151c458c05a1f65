//! A single playthrough, from a fixed secret word to a win or loss.

use super::alphabet::Alphabet;
use super::error::GameError;
use super::history::{StatusChange, StatusHistory};
use super::outcome::{GuessOutcome, RoundEnding, RoundView, Verdict};
use super::state::{Operation, RoundStatus};
use super::word::{parse_guess, SecretWord};
use chrono::Utc;
use std::num::NonZeroU32;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// One round of the game.
///
/// A round is created by [`Round::start`] and mutated only by
/// [`Round::submit_guess`]. Once it reaches `Won` or `Lost` it never
/// changes again; play continues with a fresh round.
///
/// # Example
///
/// ```rust
/// use hangman::core::{Alphabet, Round, RoundStatus, Verdict};
/// use std::num::NonZeroU32;
///
/// let limit = NonZeroU32::new(6).unwrap();
/// let mut round = Round::start("cat", limit, &Alphabet::english()).unwrap();
///
/// let outcome = round.submit_guess("c").unwrap();
/// assert_eq!(outcome.verdict, Verdict::Hit);
/// assert_eq!(round.masked_word(), "C _ _");
///
/// round.submit_guess("a").unwrap();
/// let last = round.submit_guess("t").unwrap();
/// assert!(last.ended_round());
/// assert_eq!(round.status(), RoundStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    id: Uuid,
    secret: SecretWord,
    alphabet: Alphabet,
    guessed: Vec<char>,
    remaining: u32,
    max_guesses: NonZeroU32,
    status: RoundStatus,
    history: StatusHistory,
}

impl Round {
    /// Start a round with a normalized copy of `word`.
    ///
    /// Fails with [`GameError::InvalidWord`] if the word is empty after
    /// trimming or contains letters outside `alphabet`.
    pub fn start(
        word: &str,
        max_guesses: NonZeroU32,
        alphabet: &Alphabet,
    ) -> Result<Self, GameError> {
        let secret = SecretWord::parse(word, alphabet)?;

        let mut round = Self {
            id: Uuid::new_v4(),
            secret,
            alphabet: alphabet.clone(),
            guessed: Vec::new(),
            remaining: max_guesses.get(),
            max_guesses,
            status: RoundStatus::NotStarted,
            history: StatusHistory::new(),
        };
        round.advance(RoundStatus::InProgress);

        debug!(
            round_id = %round.id,
            word_len = round.secret.len(),
            max_guesses = max_guesses.get(),
            "round started"
        );
        Ok(round)
    }

    /// Apply a raw guess from the player.
    ///
    /// Checks run in order and the first failure wins: the round must be
    /// in progress, the input must be a single accepted letter, and the
    /// letter must not have been guessed already. A rejected guess leaves
    /// the round untouched.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_active()?;
        let letter = parse_guess(input, &self.alphabet)?;
        self.ensure_fresh(letter)?;

        self.guessed.push(letter);
        let verdict = if self.secret.contains(letter) {
            Verdict::Hit
        } else {
            self.remaining = self.remaining.saturating_sub(1);
            Verdict::Miss
        };
        trace!(round_id = %self.id, %letter, ?verdict, remaining = self.remaining, "guess applied");

        let ending = self.evaluate_end();

        Ok(GuessOutcome {
            letter,
            verdict,
            remaining_guesses: self.remaining,
            ending,
        })
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> RoundView {
        RoundView {
            round_id: Some(self.id),
            status: self.status,
            masked_word: self.masked_word(),
            remaining_guesses: self.remaining,
            max_guesses: self.max_guesses.get(),
            guessed_letters: self.guessed.clone(),
            revealed_word: self.status.is_final().then(|| self.secret.to_string()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.remaining
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses.get()
    }

    /// Letters in submission order.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn masked_word(&self) -> String {
        self.secret.mask(&self.guessed)
    }

    /// Length of the secret word in letters.
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn history(&self) -> &StatusHistory {
        &self.history
    }

    /// The secret word, available only once the round is over.
    pub fn revealed_word(&self) -> Option<String> {
        self.status.is_final().then(|| self.secret.to_string())
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.status.permits(Operation::SubmitGuess) {
            Ok(())
        } else {
            Err(GameError::RoundNotActive {
                status: self.status,
            })
        }
    }

    fn ensure_fresh(&self, letter: char) -> Result<(), GameError> {
        if self.guessed.contains(&letter) {
            Err(GameError::DuplicateGuess { letter })
        } else {
            Ok(())
        }
    }

    // Win is checked before loss.
    fn evaluate_end(&mut self) -> Option<RoundEnding> {
        let ending = if self.secret.is_revealed_by(&self.guessed) {
            RoundEnding::Won {
                word: self.secret.to_string(),
            }
        } else if self.remaining == 0 {
            RoundEnding::Lost {
                word: self.secret.to_string(),
            }
        } else {
            return None;
        };

        self.advance(ending.status());
        info!(
            round_id = %self.id,
            status = %self.status,
            guesses = self.guessed.len(),
            remaining = self.remaining,
            "round finished"
        );
        Some(ending)
    }

    fn advance(&mut self, next: RoundStatus) {
        debug_assert!(self.status.can_advance_to(next));
        self.history.record(StatusChange {
            from: self.status,
            to: next,
            timestamp: Utc::now(),
            guesses_made: self.guessed.len(),
        });
        self.status = next;
    }
}
