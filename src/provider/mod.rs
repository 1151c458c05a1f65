//! Word providers: where secret words come from.
//!
//! The engine never fetches words itself. A [`WordProvider`] hands over a
//! plain string and the caller passes it to
//! [`GameEngine::start_round`](crate::engine::GameEngine::start_round).
//! Three sources ship with the crate:
//!
//! - [`FixedWord`]: a word typed in by another player
//! - [`WordList`]: a random pick from a static list
//! - `RemoteWordApi`: a word from an HTTP service (feature `remote`)
//!
//! Providers make no retry decisions; that is up to the caller.

mod error;
mod fixed;
mod list;
pub mod remote;

pub use error::ProviderError;
pub use fixed::FixedWord;
pub use list::{WordList, BUILTIN_WORDS};
#[cfg(feature = "remote")]
pub use remote::RemoteWordApi;
pub use remote::{parse_word_response, DEFAULT_WORD_API_URL};

use async_trait::async_trait;

/// A source of secret words.
#[async_trait]
pub trait WordProvider: Send {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Produce the next secret word.
    async fn fetch_word(&mut self) -> Result<String, ProviderError>;
}

#[async_trait]
impl<P: WordProvider + ?Sized> WordProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_word(&mut self) -> Result<String, ProviderError> {
        (**self).fetch_word().await
    }
}
