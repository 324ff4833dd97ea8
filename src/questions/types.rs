use serde::{Deserialize, Serialize};

/// A single multiple-choice question, fully normalized for display.
///
/// All text fields are HTML-entity-decoded — the trivia service escapes
/// quotes, ampersands, etc. in its JSON payload. Decoding happens once at
/// fetch time so display and answer comparison both see plain text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question text shown to the user.
    pub prompt: String,
    /// The one correct answer, compared by exact string equality.
    pub correct_answer: String,
    /// Incorrect answers shown alongside the correct one, in service order.
    pub distractors: Vec<String>,
}

impl Question {
    /// Total number of options presented for this question.
    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_count_includes_correct_answer() {
        let q = Question {
            prompt: "What is the capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
            distractors: vec!["London".to_string(), "Berlin".to_string(), "Madrid".to_string()],
        };
        assert_eq!(q.option_count(), 4);
    }
}
