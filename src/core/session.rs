//! The quiz session state machine.
//!
//! A [`QuizSession`] tracks one run from the first question to the final
//! score. `answer` advances the index by exactly one per call and bumps the
//! score iff the selection matches the correct answer exactly. The session
//! is complete when the index reaches the question count; nothing ever
//! decrements the score or rewinds the index.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::questions::Question;

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the selection matched the correct answer.
    pub correct: bool,
    /// True iff this was the last question.
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
}

impl QuizSession {
    /// Starts a fresh session over the given batch.
    ///
    /// Returns `None` for an empty batch — the caller treats that the same
    /// as a fetch that found no questions.
    pub fn start(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current_index: 0,
            score: 0,
        })
    }

    /// The question awaiting an answer, or `None` once the session is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Records an answer for the current question and advances.
    ///
    /// Comparison is exact string equality on the decoded text. Returns
    /// `None` if the session is already complete; the screen flow makes
    /// that unreachable (the results screen has no answer input).
    pub fn answer(&mut self, selected: &str) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.current_index)?;
        let correct = selected == question.correct_answer;
        if correct {
            self.score += 1;
        }
        self.current_index += 1;
        Some(AnswerOutcome {
            correct,
            done: self.current_index == self.questions.len(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

/// Combines the correct answer and distractors into one option list in
/// random order. Called once per presentation, so a question shown again
/// would get an independently shuffled order.
pub fn shuffle_options(question: &Question, rng: &mut impl Rng) -> Vec<String> {
    let mut options: Vec<String> = question.distractors.clone();
    options.push(question.correct_answer.clone());
    options.shuffle(rng);
    options
}
