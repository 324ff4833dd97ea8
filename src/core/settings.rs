//! Quiz settings: category, difficulty, and question count.
//!
//! `Category` and `Difficulty` are closed enums — the settings screen cycles
//! through them, so an unrecognized value cannot exist. The question count is
//! free text on screen and is validated here before any network call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive bounds for the question count.
pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 20;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Any,
    GeneralKnowledge,
    Science,
    Sports,
    History,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Any,
        Category::GeneralKnowledge,
        Category::Science,
        Category::Sports,
        Category::History,
        Category::Entertainment,
    ];

    /// The trivia service's numeric category identifier. `None` means the
    /// `category` query parameter is omitted entirely.
    pub fn id(self) -> Option<u8> {
        match self {
            Category::Any => None,
            Category::GeneralKnowledge => Some(9),
            Category::Science => Some(17),
            Category::Sports => Some(21),
            Category::History => Some(23),
            Category::Entertainment => Some(11),
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Category::Any => "Any",
            Category::GeneralKnowledge => "General Knowledge",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::History => "History",
            Category::Entertainment => "Entertainment",
        }
    }

    /// Cycles to the next category (wraps around)
    pub fn next(self) -> Category {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycles to the previous category (wraps around)
    pub fn prev(self) -> Category {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// The lowercase token the service expects. `None` means the
    /// `difficulty` query parameter is omitted entirely.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Difficulty::Any => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Any => "Any",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles to the next difficulty (wraps around)
    pub fn next(self) -> Difficulty {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycles to the previous difficulty (wraps around)
    pub fn prev(self) -> Difficulty {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Settings for one quiz run. `question_count` is always in `[1, 20]` —
/// it is only written from a successfully parsed input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    pub category: Category,
    pub difficulty: Difficulty,
    pub question_count: u8,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            category: Category::default(),
            difficulty: Difficulty::default(),
            question_count: 10,
        }
    }
}

/// Validation failure for user-entered settings. Recovered locally: the
/// user is re-prompted and no network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidCount,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidCount => write!(
                f,
                "Please enter a number between {MIN_QUESTIONS} and {MAX_QUESTIONS} for questions."
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Parses and validates the question-count input field.
/// Non-numeric input and out-of-range values are both rejected.
pub fn parse_question_count(input: &str) -> Result<u8, SettingsError> {
    let count: u8 = input
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidCount)?;
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
        return Err(SettingsError::InvalidCount);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_match_service() {
        assert_eq!(Category::Any.id(), None);
        assert_eq!(Category::GeneralKnowledge.id(), Some(9));
        assert_eq!(Category::Science.id(), Some(17));
        assert_eq!(Category::Sports.id(), Some(21));
        assert_eq!(Category::History.id(), Some(23));
        assert_eq!(Category::Entertainment.id(), Some(11));
    }

    #[test]
    fn test_difficulty_tokens_are_lowercase() {
        assert_eq!(Difficulty::Any.token(), None);
        assert_eq!(Difficulty::Easy.token(), Some("easy"));
        assert_eq!(Difficulty::Medium.token(), Some("medium"));
        assert_eq!(Difficulty::Hard.token(), Some("hard"));
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut cat = Category::Any;
        for _ in 0..Category::ALL.len() {
            cat = cat.next();
        }
        assert_eq!(cat, Category::Any);
        assert_eq!(Category::Any.prev(), Category::Entertainment);
        assert_eq!(Category::Entertainment.next(), Category::Any);
    }

    #[test]
    fn test_difficulty_cycle_wraps() {
        assert_eq!(Difficulty::Any.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Any);
        assert_eq!(Difficulty::Any.prev(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_question_count_bounds() {
        assert_eq!(parse_question_count("1"), Ok(1));
        assert_eq!(parse_question_count("20"), Ok(20));
        assert_eq!(parse_question_count("0"), Err(SettingsError::InvalidCount));
        assert_eq!(parse_question_count("21"), Err(SettingsError::InvalidCount));
    }

    #[test]
    fn test_parse_question_count_rejects_garbage() {
        assert_eq!(parse_question_count(""), Err(SettingsError::InvalidCount));
        assert_eq!(parse_question_count("ten"), Err(SettingsError::InvalidCount));
        assert_eq!(parse_question_count("-3"), Err(SettingsError::InvalidCount));
    }

    #[test]
    fn test_parse_question_count_trims_whitespace() {
        assert_eq!(parse_question_count(" 10 "), Ok(10));
    }

    #[test]
    fn test_default_settings() {
        let settings = QuizSettings::default();
        assert_eq!(settings.category, Category::Any);
        assert_eq!(settings.difficulty, Difficulty::Any);
        assert_eq!(settings.question_count, 10);
    }
}
