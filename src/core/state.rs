//! # Application State
//!
//! Core business state for the quiz. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn QuestionSource>  // where batches come from
//! ├── screen: Screen                   // Welcome → Settings → Question → Results
//! ├── settings: QuizSettings           // retained across failed attempts
//! ├── session: Option<QuizSession>     // the active run, if any
//! ├── options: Vec<String>             // shuffled options for the shown question
//! ├── is_loading: bool                 // a fetch is in flight
//! ├── error: Option<String>            // dismissible error message
//! ├── status_message: String           // status bar text
//! └── rng: SmallRng                    // option-shuffle randomness
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::session::QuizSession;
use crate::core::settings::QuizSettings;
use crate::questions::QuestionSource;

/// The four screens of the quiz flow. Each render replaces everything on
/// screen, so there is no stale widget state to carry between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Settings,
    Question,
    Results,
}

pub struct App {
    pub source: Arc<dyn QuestionSource>,
    pub screen: Screen,
    pub settings: QuizSettings,
    /// The active run. Replaced only by a successful fetch; a failed fetch
    /// leaves any previous session untouched.
    pub session: Option<QuizSession>,
    /// Shuffled option order for the currently presented question.
    /// Recomputed each time a new question is shown.
    pub options: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
    pub rng: SmallRng,
}

impl App {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self::with_rng(source, SmallRng::from_entropy())
    }

    /// Like [`App::new`] but with an injected RNG, so tests can pin the
    /// shuffle seed.
    pub fn with_rng(source: Arc<dyn QuestionSource>, rng: SmallRng) -> Self {
        Self {
            source,
            screen: Screen::Welcome,
            settings: QuizSettings::default(),
            session: None,
            options: Vec::new(),
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to the Trivia Quiz!"),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.session.is_none());
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.settings.question_count, 10);
    }
}
