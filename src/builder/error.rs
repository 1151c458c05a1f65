//! Errors building a game engine.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The configuration broke one or more rules. Every violation is listed.
    #[error("invalid configuration: {}", describe(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
