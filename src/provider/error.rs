//! Word provider errors.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a provider could not hand over a word.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("word list is empty")]
    EmptyList,

    #[error("provider returned no word")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("word request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
