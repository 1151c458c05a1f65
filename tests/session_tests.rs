//! Sessions driven by word providers.

use async_trait::async_trait;
use hangman::core::{GameError, RoundStatus};
use hangman::engine::GameEngine;
use hangman::provider::{parse_word_response, FixedWord, ProviderError, WordList, WordProvider};
use hangman::session::{Session, SessionError};

/// Hands out queued results in order.
struct Scripted {
    results: Vec<Result<String, ProviderError>>,
}

impl Scripted {
    fn new(mut results: Vec<Result<String, ProviderError>>) -> Self {
        results.reverse();
        Self { results }
    }
}

#[async_trait]
impl WordProvider for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_word(&mut self) -> Result<String, ProviderError> {
        self.results.pop().unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

#[tokio::test]
async fn fixed_word_round_can_be_won() {
    let mut session = Session::new(FixedWord::new("sun"), GameEngine::default());
    session.new_round().await.unwrap();

    for letter in ["s", "u", "n"] {
        session.guess(letter).unwrap();
    }
    assert_eq!(session.snapshot().status, RoundStatus::Won);
}

#[tokio::test]
async fn provider_failure_keeps_current_round() {
    let provider = Scripted::new(vec![
        Ok("moon".to_string()),
        Err(ProviderError::Malformed("not json".to_string())),
    ]);
    let mut session = Session::new(provider, GameEngine::default());

    session.new_round().await.unwrap();
    session.guess("m").unwrap();
    let before = session.snapshot();

    let err = session.new_round().await.unwrap_err();
    assert!(matches!(err, SessionError::Provider(ProviderError::Malformed(_))));
    assert_eq!(session.snapshot(), before);
}

#[tokio::test]
async fn failure_before_first_round_leaves_nothing_started() {
    let mut session = Session::new(Scripted::new(vec![]), GameEngine::default());

    assert!(session.new_round().await.is_err());
    assert_eq!(session.snapshot().status, RoundStatus::NotStarted);
    assert!(matches!(
        session.guess("a"),
        Err(GameError::RoundNotActive { .. })
    ));
}

#[tokio::test]
async fn unusable_word_is_reported_as_game_error() {
    let provider = Scripted::new(vec![Ok("half-moon".to_string())]);
    let mut session = Session::new(provider, GameEngine::default());

    let err = session.new_round().await.unwrap_err();
    assert!(matches!(err, SessionError::Game(GameError::InvalidWord { .. })));
}

#[tokio::test]
async fn remote_body_feeds_a_round() {
    let word = parse_word_response(r#"["lantern"]"#).unwrap();
    let mut session = Session::new(FixedWord::new(word), GameEngine::default());

    let round = session.new_round().await.unwrap();
    assert_eq!(round.word_len(), 7);
}

#[tokio::test]
async fn seeded_lists_pick_the_same_words() {
    let words = ["a", "bb", "ccc", "dddd", "eeeee"];
    let mut first = Session::new(
        WordList::new(words).unwrap().with_seed(42),
        GameEngine::default(),
    );
    let mut second = Session::new(
        WordList::new(words).unwrap().with_seed(42),
        GameEngine::default(),
    );

    for _ in 0..5 {
        first.new_round().await.unwrap();
        second.new_round().await.unwrap();
        let a = first.engine().round().unwrap().word_len();
        let b = second.engine().round().unwrap().word_len();
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn boxed_providers_work_in_sessions() {
    let provider: Box<dyn WordProvider> = Box::new(WordList::builtin().with_seed(1));
    let mut session = Session::new(provider, GameEngine::default());

    session.new_round().await.unwrap();
    assert_eq!(session.snapshot().status, RoundStatus::InProgress);
    assert_eq!(session.provider().name(), "list");
}

#[tokio::test]
async fn retry_recovers_from_a_failed_fetch() {
    let provider = Scripted::new(vec![
        Err(ProviderError::EmptyResponse),
        Ok("comet".to_string()),
    ]);
    let mut session = Session::new(provider, GameEngine::default());

    let round = session.new_round_retrying(2).await.unwrap();
    assert_eq!(round.word_len(), 5);
    assert!(session.provider().results.is_empty());
}

#[tokio::test]
async fn single_attempt_gives_up_after_one_failure() {
    let provider = Scripted::new(vec![
        Err(ProviderError::EmptyResponse),
        Ok("comet".to_string()),
    ]);
    let mut session = Session::new(provider, GameEngine::default());

    let err = session.new_round_retrying(1).await.unwrap_err();
    assert!(matches!(err, SessionError::Provider(ProviderError::EmptyResponse)));
    assert_eq!(session.provider().results.len(), 1);
    assert_eq!(session.snapshot().status, RoundStatus::NotStarted);
}

#[tokio::test]
async fn rejected_word_is_not_retried() {
    let provider = Scripted::new(vec![Ok("c4t".to_string()), Ok("moon".to_string())]);
    let mut session = Session::new(provider, GameEngine::default());

    let err = session.new_round_retrying(3).await.unwrap_err();
    assert!(matches!(err, SessionError::Game(GameError::InvalidWord { .. })));
    assert_eq!(session.provider().results.len(), 1);
}

#[tokio::test]
async fn exhausted_attempts_report_the_last_failure() {
    let provider = Scripted::new(vec![
        Err(ProviderError::EmptyResponse),
        Err(ProviderError::Malformed("html".to_string())),
    ]);
    let mut session = Session::new(provider, GameEngine::default());

    let err = session.new_round_retrying(2).await.unwrap_err();
    assert!(matches!(err, SessionError::Provider(ProviderError::Malformed(_))));
}

#[tokio::test]
async fn zero_attempts_still_asks_once() {
    let provider = Scripted::new(vec![Ok("star".to_string())]);
    let mut session = Session::new(provider, GameEngine::default());

    session.new_round_retrying(0).await.unwrap();
    assert_eq!(session.snapshot().status, RoundStatus::InProgress);
}
