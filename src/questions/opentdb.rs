//! Open Trivia Database source implementation.
//!
//! One GET to `/api.php` per fetch. The service embeds its own status in the
//! JSON payload (`response_code`, 0 = success) and HTML-escapes every text
//! field, so the raw payload is decoded into plain-text [`Question`]s here.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::settings::QuizSettings;

use super::source::{FetchError, QuestionSource};
use super::types::Question;

const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// `response_code` value the service uses for a successful lookup.
const RESPONSE_CODE_SUCCESS: u8 = 0;

// ============================================================================
// Open Trivia DB API Types
// ============================================================================

/// Top-level response payload. `results` is absent on some error codes.
#[derive(Deserialize, Debug)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

/// One question as the service returns it: HTML-escaped text fields.
#[derive(Deserialize, Debug)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl ApiQuestion {
    /// Decodes HTML entities in every text field, producing a plain-text
    /// [`Question`]. Distractor order is preserved.
    fn decode(self) -> Question {
        Question {
            prompt: decode_entities(&self.question),
            correct_answer: decode_entities(&self.correct_answer),
            distractors: self
                .incorrect_answers
                .iter()
                .map(|s| decode_entities(s))
                .collect(),
        }
    }
}

fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

// ============================================================================
// Source Implementation
// ============================================================================

/// Question source backed by opentdb.com.
pub struct OpenTdbSource {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenTdbSource {
    /// Creates a new Open Trivia DB source.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to opentdb.com)
    /// * `timeout` - Per-request timeout; its expiry surfaces as `Transport`
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Builds the query string for the given settings. Parameters for "Any"
    /// category/difficulty are omitted entirely, not sent empty.
    fn query_params(settings: &QuizSettings) -> Vec<(&'static str, String)> {
        let mut params = vec![("amount", settings.question_count.to_string())];
        if let Some(id) = settings.category.id() {
            params.push(("category", id.to_string()));
        }
        if let Some(token) = settings.difficulty.token() {
            params.push(("difficulty", token.to_string()));
        }
        params.push(("type", "multiple".to_string()));
        params
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    fn name(&self) -> &str {
        "opentdb"
    }

    async fn fetch(&self, settings: &QuizSettings) -> Result<Vec<Question>, FetchError> {
        let params = Self::query_params(settings);
        info!(
            "Fetching questions: amount={}, category={:?}, difficulty={:?}",
            settings.question_count,
            settings.category.id(),
            settings.difficulty.token(),
        );

        let response = self
            .client
            .get(format!("{}/api.php", self.base_url))
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!("Trivia service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            warn!("Trivia service HTTP error: {status}");
            return Err(FetchError::Transport(format!("HTTP {status}")));
        }

        let payload: ApiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if payload.response_code != RESPONSE_CODE_SUCCESS || payload.results.is_empty() {
            warn!(
                "Trivia service returned no questions (response_code={}, results={})",
                payload.response_code,
                payload.results.len()
            );
            return Err(FetchError::NoQuestions);
        }

        let questions: Vec<Question> = payload
            .results
            .into_iter()
            .map(ApiQuestion::decode)
            .collect();
        info!("Fetched {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{Category, Difficulty};

    fn settings(category: Category, difficulty: Difficulty, count: u8) -> QuizSettings {
        QuizSettings {
            category,
            difficulty,
            question_count: count,
        }
    }

    #[test]
    fn test_query_params_full() {
        let params = OpenTdbSource::query_params(&settings(Category::Science, Difficulty::Easy, 5));
        assert_eq!(
            params,
            vec![
                ("amount", "5".to_string()),
                ("category", "17".to_string()),
                ("difficulty", "easy".to_string()),
                ("type", "multiple".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_any_omits_filters() {
        let params = OpenTdbSource::query_params(&settings(Category::Any, Difficulty::Any, 10));
        assert_eq!(
            params,
            vec![
                ("amount", "10".to_string()),
                ("type", "multiple".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("&quot;Hello&quot; &amp; friends"),
            "\"Hello\" & friends"
        );
        assert_eq!(decode_entities("What&#039;s up?"), "What's up?");
        assert_eq!(decode_entities("plain text"), "plain text");
    }

    #[test]
    fn test_api_question_decode_preserves_order() {
        let api = ApiQuestion {
            question: "1 &lt; 2?".to_string(),
            correct_answer: "Yes".to_string(),
            incorrect_answers: vec!["No".to_string(), "Maybe".to_string()],
        };
        let q = api.decode();
        assert_eq!(q.prompt, "1 < 2?");
        assert_eq!(q.correct_answer, "Yes");
        assert_eq!(q.distractors, vec!["No", "Maybe"]);
    }

    #[test]
    fn test_api_response_missing_results_defaults_empty() {
        let payload: ApiResponse = serde_json::from_str(r#"{"response_code":2}"#).unwrap();
        assert_eq!(payload.response_code, 2);
        assert!(payload.results.is_empty());
    }
}
