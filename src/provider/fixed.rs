//! A word chosen by another player.

use super::{ProviderError, WordProvider};
use async_trait::async_trait;

/// Hands out the same word every time it is asked.
///
/// This is the "second player types a word" source. The word is passed
/// through untouched; the engine does the normalizing and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedWord {
    word: String,
}

impl FixedWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

#[async_trait]
impl WordProvider for FixedWord {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_word(&mut self) -> Result<String, ProviderError> {
        Ok(self.word.clone())
    }
}
