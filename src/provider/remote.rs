//! Words fetched from an HTTP word service.
//!
//! The service is expected to answer with a JSON array of strings, e.g.
//! `["lantern"]`; the first element is used.

use super::ProviderError;

/// Public random-word service used by default.
pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word?number=1";

/// Extract the word from a response body shaped like `["word", ...]`.
pub fn parse_word_response(body: &str) -> Result<String, ProviderError> {
    let words: Vec<String> =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    match words.into_iter().next() {
        Some(word) if !word.trim().is_empty() => Ok(word),
        _ => Err(ProviderError::EmptyResponse),
    }
}

#[cfg(feature = "remote")]
pub use client::RemoteWordApi;

#[cfg(feature = "remote")]
mod client {
    use super::{parse_word_response, DEFAULT_WORD_API_URL};
    use crate::provider::{ProviderError, WordProvider};
    use async_trait::async_trait;
    use std::time::Duration;
    use tracing::debug;

    /// Fetches a word over HTTP on every call.
    #[derive(Clone, Debug)]
    pub struct RemoteWordApi {
        client: reqwest::Client,
        url: String,
    }

    impl RemoteWordApi {
        /// Client for `url` giving up after `timeout`.
        pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self {
                client,
                url: url.into(),
            })
        }

        /// Client for the default public service.
        pub fn with_default_url(timeout: Duration) -> Result<Self, ProviderError> {
            Self::new(DEFAULT_WORD_API_URL, timeout)
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait]
    impl WordProvider for RemoteWordApi {
        fn name(&self) -> &str {
            "remote"
        }

        async fn fetch_word(&mut self) -> Result<String, ProviderError> {
            let body = self
                .client
                .get(&self.url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            debug!(url = %self.url, bytes = body.len(), "word service answered");

            parse_word_response(&body)
        }
    }
}
