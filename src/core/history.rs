//! Status transition history for a round.
//!
//! Every time a round's status changes, a timestamped [`StatusChange`] is
//! appended. History only grows; entries are never rewritten.

use super::state::RoundStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single status change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The status being left
    pub from: RoundStatus,
    /// The status being entered
    pub to: RoundStatus,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Number of accepted guesses at the time of the change
    pub guesses_made: usize,
}

/// Ordered history of status changes.
///
/// # Example
///
/// ```rust
/// use hangman::core::{RoundStatus, StatusChange, StatusHistory};
/// use chrono::Utc;
///
/// let mut history = StatusHistory::new();
/// history.record(StatusChange {
///     from: RoundStatus::NotStarted,
///     to: RoundStatus::InProgress,
///     timestamp: Utc::now(),
///     guesses_made: 0,
/// });
///
/// assert_eq!(history.get_path(), vec![RoundStatus::NotStarted, RoundStatus::InProgress]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusHistory {
    changes: Vec<StatusChange>,
}

impl StatusHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Append a change.
    pub fn record(&mut self, change: StatusChange) {
        self.changes.push(change);
    }

    /// Statuses traversed in order: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<RoundStatus> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|c| c.to));
        path
    }

    /// Elapsed time of the round.
    ///
    /// Measured from the first change to the final status, or to now while
    /// the round is still running. Returns `None` if nothing has been
    /// recorded.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_at(Utc::now())
    }

    fn duration_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        let end = if last.to.is_final() { last.timestamp } else { now };
        end.signed_duration_since(first.timestamp).to_std().ok()
    }

    /// All recorded changes.
    pub fn changes(&self) -> &[StatusChange] {
        &self.changes
    }

    /// The most recent change, if any.
    pub fn last(&self) -> Option<&StatusChange> {
        self.changes.last()
    }
}
