//! # Actions
//!
//! Everything that can happen in the quiz becomes an `Action`.
//! User picks an option? That's `Action::AnswerSelected(text)`.
//! The fetch finishes? That's `Action::FetchCompleted(result)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere: when
//! the reducer needs a network call it returns `Effect::SpawnFetch` and
//! the event loop spawns the task.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Answer selections carry the chosen option's text explicitly in the
//! action payload — there are no per-button callbacks capturing loop
//! variables, so there is nothing to late-bind incorrectly.

use log::{info, warn};

use crate::core::session::{QuizSession, shuffle_options};
use crate::core::settings::{QuizSettings, parse_question_count};
use crate::core::state::{App, Screen};
use crate::questions::{FetchError, Question};

/// Cycle direction for the enum settings fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Every event the quiz reacts to, from user input or background tasks.
#[derive(Debug)]
pub enum Action {
    /// Welcome → Settings.
    StartQuiz,
    /// Cycle the category field on the settings screen.
    CycleCategory(Direction),
    /// Cycle the difficulty field on the settings screen.
    CycleDifficulty(Direction),
    /// Validate settings and, if valid, kick off a fetch. Carries the raw
    /// question-count input; parsing happens in the reducer.
    SubmitSettings { count_input: String },
    /// A background fetch finished.
    FetchCompleted(Result<Vec<Question>, FetchError>),
    /// The user picked an option on the question screen.
    AnswerSelected(String),
    /// Results → Settings for another run.
    Retry,
    /// Clear the current error dialog.
    DismissError,
    /// Exit the application.
    Quit,
}

/// Side effect the event loop must perform after a state update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a background fetch for the given (validated) settings.
    SpawnFetch(QuizSettings),
    Quit,
}

/// Applies an action to the state. The only place state changes.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::StartQuiz => {
            if app.screen == Screen::Welcome {
                app.screen = Screen::Settings;
                app.status_message = String::from("Choose your quiz settings");
            }
            Effect::None
        }

        Action::CycleCategory(direction) => {
            if app.screen == Screen::Settings {
                app.settings.category = match direction {
                    Direction::Next => app.settings.category.next(),
                    Direction::Prev => app.settings.category.prev(),
                };
            }
            Effect::None
        }

        Action::CycleDifficulty(direction) => {
            if app.screen == Screen::Settings {
                app.settings.difficulty = match direction {
                    Direction::Next => app.settings.difficulty.next(),
                    Direction::Prev => app.settings.difficulty.prev(),
                };
            }
            Effect::None
        }

        Action::SubmitSettings { count_input } => {
            if app.screen != Screen::Settings || app.is_loading {
                // Debounce: a fetch is already in flight, ignore resubmission.
                return Effect::None;
            }
            match parse_question_count(&count_input) {
                Ok(count) => {
                    app.settings.question_count = count;
                    app.error = None;
                    app.is_loading = true;
                    app.status_message = String::from("Fetching questions...");
                    Effect::SpawnFetch(app.settings.clone())
                }
                Err(e) => {
                    warn!("Settings validation failed: {e}");
                    app.error = Some(e.to_string());
                    Effect::None
                }
            }
        }

        Action::FetchCompleted(result) => {
            app.is_loading = false;
            match result.and_then(|qs| QuizSession::start(qs).ok_or(FetchError::NoQuestions)) {
                Ok(session) => {
                    info!("Starting session with {} questions", session.total());
                    // Discard any previous run only now that a new one exists.
                    app.session = Some(session);
                    present_current_question(app);
                    app.screen = Screen::Question;
                    app.status_message.clear();
                }
                Err(e) => {
                    warn!("Fetch failed: {e}");
                    app.error = Some(e.to_string());
                    app.status_message = String::from("Choose your quiz settings");
                }
            }
            Effect::None
        }

        Action::AnswerSelected(selected) => {
            if app.screen != Screen::Question {
                return Effect::None;
            }
            let Some(session) = app.session.as_mut() else {
                return Effect::None;
            };
            let Some(outcome) = session.answer(&selected) else {
                return Effect::None;
            };
            info!(
                "Answered question {}/{}: correct={}",
                session.current_index(),
                session.total(),
                outcome.correct
            );
            if outcome.done {
                app.options.clear();
                app.screen = Screen::Results;
            } else {
                present_current_question(app);
            }
            Effect::None
        }

        Action::Retry => {
            if app.screen == Screen::Results {
                app.screen = Screen::Settings;
                app.status_message = String::from("Choose your quiz settings");
            }
            Effect::None
        }

        Action::DismissError => {
            app.error = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Recomputes the shuffled option order for the question now being shown.
fn present_current_question(app: &mut App) {
    let Some(session) = app.session.as_ref() else {
        app.options.clear();
        return;
    };
    app.options = match session.current_question() {
        Some(question) => shuffle_options(question, &mut app.rng),
        None => Vec::new(),
    };
}
