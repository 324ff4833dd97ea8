//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! network fetch never runs on this loop: `Effect::SpawnFetch` hands the
//! request to a tokio task, which reports back through an mpsc channel of
//! `Action`s, so the interaction surface stays responsive while a batch
//! is in flight.

mod event;
mod ui;

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::action::{Action, Direction, Effect, update};
use crate::core::settings::QuizSettings;
use crate::core::state::{App, Screen};
use crate::questions::QuestionSource;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub const WELCOME_MENU: [&str; 3] = ["Start Quiz", "Instructions", "Quit"];
pub const RESULTS_MENU: [&str; 2] = ["Retry", "Quit"];

pub const INSTRUCTIONS: &str = "1. Choose your quiz settings (category, difficulty, number of questions).\n\
    2. Answer the multiple-choice questions.\n\
    3. Each correct answer gives you 1 point.\n\
    4. Try to get the highest score!";

/// Which settings row has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Category,
    Difficulty,
    Count,
}

impl SettingsField {
    fn next(self) -> Self {
        match self {
            SettingsField::Category => SettingsField::Difficulty,
            SettingsField::Difficulty => SettingsField::Count,
            SettingsField::Count => SettingsField::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            SettingsField::Category => SettingsField::Count,
            SettingsField::Difficulty => SettingsField::Category,
            SettingsField::Count => SettingsField::Difficulty,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub welcome_selected: usize,
    pub results_selected: usize,
    pub settings_field: SettingsField,
    /// Raw text of the question-count field; validated on submit.
    pub count_input: String,
    /// Highlighted option on the question screen.
    pub option_selected: usize,
    /// Instructions dialog visibility (None of this reaches core).
    pub show_instructions: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            welcome_selected: 0,
            results_selected: 0,
            settings_field: SettingsField::default(),
            count_input: String::from("10"),
            option_selected: 0,
            show_instructions: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(source: Arc<dyn QuestionSource>) -> std::io::Result<()> {
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;

        let first_event = poll_event_timeout(Duration::from_millis(100));

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                dispatch(&mut app, &mut tui, Action::Quit, &tx, &mut should_quit);
                continue;
            }

            // Open dialogs swallow everything until dismissed
            if app.error.is_some() {
                if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                    dispatch(&mut app, &mut tui, Action::DismissError, &tx, &mut should_quit);
                }
                continue;
            }
            if tui.show_instructions {
                if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                    tui.show_instructions = false;
                }
                continue;
            }

            match app.screen {
                Screen::Welcome => handle_welcome(&mut app, &mut tui, event, &tx, &mut should_quit),
                Screen::Settings => {
                    handle_settings(&mut app, &mut tui, event, &tx, &mut should_quit)
                }
                Screen::Question => {
                    handle_question(&mut app, &mut tui, event, &tx, &mut should_quit)
                }
                Screen::Results => handle_results(&mut app, &mut tui, event, &tx, &mut should_quit),
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, &mut tui, action, &tx, &mut should_quit);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one action through the reducer and performs the resulting effect.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    let previous_screen = app.screen;
    let effect = update(app, action);
    match effect {
        Effect::Quit => *should_quit = true,
        Effect::SpawnFetch(settings) => {
            spawn_fetch(app.source.clone(), settings, tx.clone());
        }
        Effect::None => {}
    }
    // Entering a screen resets its cursor; leaving one drops nothing else.
    if app.screen != previous_screen {
        tui.option_selected = 0;
        tui.results_selected = 0;
    }
}

fn handle_welcome(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::CursorUp => {
            tui.welcome_selected =
                (tui.welcome_selected + WELCOME_MENU.len() - 1) % WELCOME_MENU.len();
        }
        TuiEvent::CursorDown => {
            tui.welcome_selected = (tui.welcome_selected + 1) % WELCOME_MENU.len();
        }
        TuiEvent::Submit => match tui.welcome_selected {
            0 => dispatch(app, tui, Action::StartQuiz, tx, should_quit),
            1 => tui.show_instructions = true,
            _ => dispatch(app, tui, Action::Quit, tx, should_quit),
        },
        TuiEvent::Escape => dispatch(app, tui, Action::Quit, tx, should_quit),
        _ => {}
    }
}

fn handle_settings(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::CursorUp => tui.settings_field = tui.settings_field.prev(),
        TuiEvent::CursorDown => tui.settings_field = tui.settings_field.next(),
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            let direction = if event == TuiEvent::CursorLeft {
                Direction::Prev
            } else {
                Direction::Next
            };
            match tui.settings_field {
                SettingsField::Category => {
                    dispatch(app, tui, Action::CycleCategory(direction), tx, should_quit)
                }
                SettingsField::Difficulty => {
                    dispatch(app, tui, Action::CycleDifficulty(direction), tx, should_quit)
                }
                SettingsField::Count => {}
            }
        }
        TuiEvent::InputChar(c) => {
            // Two digits cover the whole valid range
            if tui.settings_field == SettingsField::Count
                && c.is_ascii_digit()
                && tui.count_input.len() < 2
            {
                tui.count_input.push(c);
            }
        }
        TuiEvent::Backspace => {
            if tui.settings_field == SettingsField::Count {
                tui.count_input.pop();
            }
        }
        TuiEvent::Submit => {
            let action = Action::SubmitSettings {
                count_input: tui.count_input.clone(),
            };
            dispatch(app, tui, action, tx, should_quit);
        }
        _ => {}
    }
}

fn handle_question(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    let option_count = app.options.len();
    match event {
        TuiEvent::CursorUp if option_count > 0 => {
            tui.option_selected = (tui.option_selected + option_count - 1) % option_count;
        }
        TuiEvent::CursorDown if option_count > 0 => {
            tui.option_selected = (tui.option_selected + 1) % option_count;
        }
        TuiEvent::Submit => {
            if let Some(option) = app.options.get(tui.option_selected).cloned() {
                tui.option_selected = 0;
                dispatch(app, tui, Action::AnswerSelected(option), tx, should_quit);
            }
        }
        // Digit keys answer directly: 1 = first option, and so on
        TuiEvent::InputChar(c) if c.is_ascii_digit() => {
            let index = (c as usize).wrapping_sub('1' as usize);
            if let Some(option) = app.options.get(index).cloned() {
                tui.option_selected = 0;
                dispatch(app, tui, Action::AnswerSelected(option), tx, should_quit);
            }
        }
        _ => {}
    }
}

fn handle_results(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            tui.results_selected = (tui.results_selected + 1) % RESULTS_MENU.len();
        }
        TuiEvent::Submit => match tui.results_selected {
            0 => dispatch(app, tui, Action::Retry, tx, should_quit),
            _ => dispatch(app, tui, Action::Quit, tx, should_quit),
        },
        _ => {}
    }
}

/// Spawns the one network call. The result comes back as an action; the
/// channel send only fails when the UI has already shut down.
fn spawn_fetch(
    source: Arc<dyn QuestionSource>,
    settings: QuizSettings,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning question fetch from '{}'", source.name());
    tokio::spawn(async move {
        let result = source.fetch(&settings).await;
        if tx.send(Action::FetchCompleted(result)).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
