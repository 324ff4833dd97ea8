//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::settings::QuizSettings;
use crate::core::state::App;
use crate::questions::{FetchError, Question, QuestionSource};

/// A source that returns a canned batch without touching the network.
pub struct StaticSource {
    pub questions: Vec<Question>,
}

#[async_trait]
impl QuestionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _settings: &QuizSettings) -> Result<Vec<Question>, FetchError> {
        Ok(self.questions.clone())
    }
}

/// The canned 2-question batch used throughout the reducer tests:
/// Q1's correct answer is "Paris", Q2's is "42".
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "What is the capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
            distractors: vec![
                "London".to_string(),
                "Berlin".to_string(),
                "Madrid".to_string(),
            ],
        },
        Question {
            prompt: "The answer to life, the universe, and everything?".to_string(),
            correct_answer: "42".to_string(),
            distractors: vec!["7".to_string(), "13".to_string(), "101".to_string()],
        },
    ]
}

/// Creates a test App with a StaticSource and a pinned shuffle seed.
pub fn test_app() -> App {
    App::with_rng(
        Arc::new(StaticSource {
            questions: sample_questions(),
        }),
        SmallRng::seed_from_u64(7),
    )
}
