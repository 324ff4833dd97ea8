//! Per-screen rendering. Every frame redraws the whole screen from the
//! current `App` + `TuiState`, so a transition can never leave stale
//! widgets behind.

use crate::core::state::{App, Screen};
use crate::tui::{INSTRUCTIONS, RESULTS_MENU, SettingsField, TuiState, WELCOME_MENU};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        String::from("Trivia Quiz")
    } else {
        format!("Trivia Quiz | {}", app.status_message)
    };
    frame.render_widget(
        Span::styled(title_text, Style::default().fg(Color::Cyan)),
        title_area,
    );

    match app.screen {
        Screen::Welcome => draw_welcome(frame, main_area, tui),
        Screen::Settings => draw_settings(frame, main_area, app, tui),
        Screen::Question => draw_question(frame, main_area, app, tui),
        Screen::Results => draw_results(frame, main_area, app, tui),
    }

    frame.render_widget(
        Span::styled(hint_text(app, tui), Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    // Dialogs render last, over everything else
    if tui.show_instructions {
        draw_popup(frame, main_area, "Instructions", INSTRUCTIONS);
    }
    if let Some(error_msg) = &app.error {
        draw_popup(frame, main_area, "Error", error_msg);
    }
}

fn hint_text(app: &App, tui: &TuiState) -> &'static str {
    if app.error.is_some() || tui.show_instructions {
        return "Enter/Esc dismiss";
    }
    match app.screen {
        Screen::Welcome => "↑/↓ move · Enter select · Esc quit",
        Screen::Settings if app.is_loading => "Fetching questions...",
        Screen::Settings => "↑/↓ field · ←/→ change · digits edit count · Enter begin quiz",
        Screen::Question => "↑/↓ move · Enter answer · 1-9 quick answer",
        Screen::Results => "↑/↓ move · Enter select",
    }
}

fn draw_welcome(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to the Trivia Quiz App!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(menu_lines(&WELCOME_MENU, tui.welcome_selected));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_vertically(area, height));
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let field_line = |field: SettingsField, label: &str, value: String| {
        let focused = tui.settings_field == field;
        let marker = if focused { "▸ " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{marker}{label} {value}"), style))
    };

    // Cursor shown on the count field while it has focus
    let count_value = if tui.settings_field == SettingsField::Count {
        format!("{}_", tui.count_input)
    } else {
        tui.count_input.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz Settings",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field_line(
            SettingsField::Category,
            "Category:        ",
            format!("< {} >", app.settings.category.label()),
        ),
        field_line(
            SettingsField::Difficulty,
            "Difficulty:      ",
            format!("< {} >", app.settings.difficulty.label()),
        ),
        field_line(SettingsField::Count, "Questions (1-20):", count_value),
    ];
    if app.is_loading {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Fetching questions...",
            Style::default().fg(Color::Green),
        )));
    }

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_vertically(area, height));
}

fn draw_question(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(1),
        Min(3),
        Length(app.options.len() as u16 + 1),
    ]);
    let [header_area, _, prompt_area, options_area] = layout.areas(area);

    let header = format!(
        "Question {}/{}",
        session.current_index() + 1,
        session.total()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            header,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        header_area,
    );

    let prompt = Paragraph::new(question.prompt.as_str())
        .block(Block::bordered())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(prompt, prompt_area);

    let option_lines: Vec<Line> = app
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let selected = index == tui.option_selected;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{marker}{}. {option}", index + 1),
                style,
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(option_lines).alignment(Alignment::Center),
        options_area,
    );
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let (score, total) = app
        .session
        .as_ref()
        .map(|s| (s.score(), s.total()))
        .unwrap_or((0, 0));

    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Your Score: {score}/{total}")),
        Line::default(),
    ];
    lines.extend(menu_lines(&RESULTS_MENU, tui.results_selected));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_vertically(area, height));
}

fn menu_lines(items: &[&'static str], selected: usize) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if index == selected {
                Line::from(Span::styled(
                    format!("▸ {item}"),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {item}"))
            }
        })
        .collect()
}

/// Centered dismissible dialog (error or instructions).
fn draw_popup(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup_area = centered_rect(area, 60, 40);
    frame.render_widget(Clear, popup_area);
    let paragraph = Paragraph::new(message)
        .block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn centered_vertically(area: Rect, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_questions, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &TuiState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_welcome() {
        let app = test_app();
        let terminal = render(&app, &TuiState::new());
        let text = buffer_text(&terminal);
        assert!(text.contains("Welcome to the Trivia Quiz App!"));
        assert!(text.contains("Start Quiz"));
    }

    #[test]
    fn test_draw_settings() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        let terminal = render(&app, &TuiState::new());
        let text = buffer_text(&terminal);
        assert!(text.contains("Quiz Settings"));
        assert!(text.contains("Category:"));
        assert!(text.contains("Questions (1-20):"));
    }

    #[test]
    fn test_draw_question_shows_prompt_and_counter() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(
            &mut app,
            Action::SubmitSettings {
                count_input: "2".to_string(),
            },
        );
        update(&mut app, Action::FetchCompleted(Ok(sample_questions())));

        let terminal = render(&app, &TuiState::new());
        let text = buffer_text(&terminal);
        assert!(text.contains("Question 1/2"));
        assert!(text.contains("What is the capital of France?"));
        assert!(text.contains("Paris"));
    }

    #[test]
    fn test_draw_results_shows_score() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(
            &mut app,
            Action::SubmitSettings {
                count_input: "2".to_string(),
            },
        );
        update(&mut app, Action::FetchCompleted(Ok(sample_questions())));
        update(&mut app, Action::AnswerSelected("Paris".to_string()));
        update(&mut app, Action::AnswerSelected("7".to_string()));

        let terminal = render(&app, &TuiState::new());
        let text = buffer_text(&terminal);
        assert!(text.contains("Quiz Completed!"));
        assert!(text.contains("Your Score: 1/2"));
    }

    #[test]
    fn test_draw_error_popup() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(
            &mut app,
            Action::SubmitSettings {
                count_input: "21".to_string(),
            },
        );
        let terminal = render(&app, &TuiState::new());
        let text = buffer_text(&terminal);
        assert!(text.contains("Error"));
        assert!(text.contains("between 1 and 20"));
    }

    #[test]
    fn test_draw_instructions_popup() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.show_instructions = true;
        let terminal = render(&app, &tui);
        let text = buffer_text(&terminal);
        assert!(text.contains("Instructions"));
    }
}
