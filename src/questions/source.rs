use std::fmt;

use async_trait::async_trait;

use crate::core::settings::QuizSettings;

use super::types::Question;

/// Errors that can occur while fetching a question batch.
/// Every variant is recoverable — the UI shows a message and returns the
/// user to the settings screen with their inputs intact.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused) or an
    /// unusable response (HTTP error status, malformed body).
    Transport(String),
    /// The service answered but had no questions for this combination of
    /// category, difficulty, and count.
    NoQuestions,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Failed to fetch questions: {msg}"),
            FetchError::NoQuestions => write!(
                f,
                "No questions found for the selected options. Try different settings."
            ),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of trivia questions.
///
/// The production implementation talks to the Open Trivia Database; tests
/// substitute a canned source. One call fetches one batch — no retries,
/// no caching.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches a batch of questions matching the given settings.
    ///
    /// Settings must already be validated; the count is within `[1, 20]`.
    /// Returns the questions in the order the service provided them.
    async fn fetch(&self, settings: &QuizSettings) -> Result<Vec<Question>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let transport = FetchError::Transport("connection refused".to_string());
        assert_eq!(
            transport.to_string(),
            "Failed to fetch questions: connection refused"
        );

        let empty = FetchError::NoQuestions;
        assert!(empty.to_string().contains("No questions found"));
    }
}
