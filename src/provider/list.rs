//! Random choice from a static word list.

use super::{ProviderError, WordProvider};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::path::Path;

/// Words used when no list is supplied.
pub const BUILTIN_WORDS: &[&str] = &[
    "ANCHOR", "BALLAD", "CACTUS", "DOLPHIN", "EMBER", "FALCON", "GARDEN", "HARBOR",
    "ISLAND", "JIGSAW", "KETTLE", "LANTERN", "MEADOW", "NEBULA", "ORCHID", "PUZZLE",
    "QUARTZ", "RIDDLE", "SPHINX", "THUNDER", "UMBRELLA", "VOYAGE", "WALRUS", "YONDER",
    "ZEPHYR",
];

/// Picks a random word from a fixed list.
///
/// # Example
///
/// ```rust
/// use hangman::provider::{WordList, WordProvider};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let mut list = WordList::new(["apple", "pear"]).unwrap().with_seed(7);
/// let word = rt.block_on(list.fetch_word()).unwrap();
/// assert!(word == "apple" || word == "pear");
/// ```
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    /// Build from any collection of words. Blank entries are dropped.
    pub fn new<I, S>(words: I) -> Result<Self, ProviderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(ProviderError::EmptyList);
        }

        Ok(Self {
            words,
            rng: StdRng::from_rng(&mut rand::rng()),
        })
    }

    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Parse one word per line, skipping blank lines and `#` comments.
    pub fn parse(text: &str) -> Result<Self, ProviderError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Read a word list file in the format accepted by [`WordList::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Reseed so the sequence of picks is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[async_trait]
impl WordProvider for WordList {
    fn name(&self) -> &str {
        "list"
    }

    async fn fetch_word(&mut self) -> Result<String, ProviderError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ProviderError::EmptyList)
    }
}
