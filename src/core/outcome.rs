//! Values handed back to the caller: guess outcomes and round views.

use super::state::RoundStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an accepted guess was in the secret word.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Hit,
    Miss,
}

/// How a round finished, carrying the secret word for display.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RoundEnding {
    Won { word: String },
    Lost { word: String },
}

impl RoundEnding {
    pub fn word(&self) -> &str {
        match self {
            Self::Won { word } | Self::Lost { word } => word,
        }
    }

    pub fn status(&self) -> RoundStatus {
        match self {
            Self::Won { .. } => RoundStatus::Won,
            Self::Lost { .. } => RoundStatus::Lost,
        }
    }
}

/// Result of an accepted guess.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// The normalized letter that was guessed
    pub letter: char,
    pub verdict: Verdict,
    /// Guesses left after this one was applied
    pub remaining_guesses: u32,
    /// Set when this guess ended the round
    pub ending: Option<RoundEnding>,
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        self.verdict == Verdict::Hit
    }

    pub fn ended_round(&self) -> bool {
        self.ending.is_some()
    }
}

/// Read-only picture of a round for rendering.
///
/// `revealed_word` is only filled in once the round is over, so a view
/// can be shown to the player at any time without leaking the answer.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RoundView {
    pub round_id: Option<Uuid>,
    pub status: RoundStatus,
    /// Letters joined by single spaces, unguessed ones as `_`
    pub masked_word: String,
    pub remaining_guesses: u32,
    pub max_guesses: u32,
    /// Guessed letters in the order they were submitted
    pub guessed_letters: Vec<char>,
    pub revealed_word: Option<String>,
}

impl RoundView {
    /// View reported before any round has been started.
    pub fn not_started(max_guesses: u32) -> Self {
        Self {
            round_id: None,
            status: RoundStatus::NotStarted,
            masked_word: String::new(),
            remaining_guesses: max_guesses,
            max_guesses,
            guessed_letters: Vec::new(),
            revealed_word: None,
        }
    }

    /// Number of `_` blanks still in the masked word.
    pub fn blanks(&self) -> usize {
        self.masked_word
            .chars()
            .filter(|c| *c == super::word::BLANK)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_reports_hit_and_ending() {
        let miss = GuessOutcome {
            letter: 'Q',
            verdict: Verdict::Miss,
            remaining_guesses: 0,
            ending: Some(RoundEnding::Lost {
                word: "DOG".to_string(),
            }),
        };
        assert!(!miss.is_hit());
        assert!(miss.ended_round());

        let hit = GuessOutcome {
            verdict: Verdict::Hit,
            ending: None,
            ..miss
        };
        assert!(hit.is_hit());
        assert!(!hit.ended_round());
    }

    #[test]
    fn ending_exposes_word_and_status() {
        let won = RoundEnding::Won {
            word: "CAT".to_string(),
        };
        assert_eq!(won.word(), "CAT");
        assert_eq!(won.status(), RoundStatus::Won);

        let lost = RoundEnding::Lost {
            word: "DOG".to_string(),
        };
        assert_eq!(lost.status(), RoundStatus::Lost);
    }

    #[test]
    fn not_started_view_is_empty() {
        let view = RoundView::not_started(6);
        assert_eq!(view.status, RoundStatus::NotStarted);
        assert!(view.masked_word.is_empty());
        assert_eq!(view.blanks(), 0);
        assert!(view.guessed_letters.is_empty());
        assert!(view.round_id.is_none());
    }

    #[test]
    fn view_serializes_to_json() {
        let view = RoundView {
            round_id: None,
            status: RoundStatus::InProgress,
            masked_word: "C _ _".to_string(),
            remaining_guesses: 5,
            max_guesses: 6,
            guessed_letters: vec!['C', 'X'],
            revealed_word: None,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["masked_word"], "C _ _");
        assert_eq!(json["guessed_letters"], serde_json::json!(["C", "X"]));

        let back: RoundView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }
}
