//! TUI rendering with ratatui
//!
//! Draws the guess board, the clue-coloured keyboard, and the status line
//! from the engine's state snapshot. Everything here is read-only.

use super::app::App;
use crate::core::{Clue, Letter, RowState};
use crate::engine::{GameStatus, MAX_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// QWERTY layout for the on-screen keyboard
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(3),                   // Hint / result line
            Constraint::Length(5),                   // Keyboard
            Constraint::Length(3),                   // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D R O W")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn clue_style(clue: Clue) -> Style {
    match clue {
        Clue::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Clue::Elsewhere => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Clue::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Clue::Editing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn letter_span(letter: &Letter, clue_visible: bool, invalid: bool) -> Span<'static> {
    let cell = format!(" {} ", letter.value.to_ascii_uppercase());

    let style = if clue_visible {
        clue_style(letter.clue)
    } else if invalid {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        clue_style(Clue::Editing)
    };

    Span::styled(cell, style)
}

fn empty_cell() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();

    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for i in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(state.word_length * 2);

        if let Some(row) = state.rows.get(i) {
            // How many of this row's clues are visible: locked rows show all,
            // the pending row follows the reveal animation
            let visible = match row.state {
                RowState::Locked => row.letters.len(),
                RowState::Pending => app.reveal.map_or(0, |reveal| reveal.shown),
                RowState::Editing => 0,
            };
            let invalid = row.state == RowState::Editing
                && row.is_full(state.word_length)
                && !row.is_valid_word;

            for (j, letter) in row.letters.iter().enumerate() {
                spans.push(letter_span(letter, j < visible, invalid));
                spans.push(Span::raw(" "));
            }
            for _ in row.letters.len()..state.word_length {
                spans.push(empty_cell());
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..state.word_length {
                spans.push(empty_cell());
                spans.push(Span::raw(" "));
            }
        }

        spans.pop();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} letters ", state.word_length)),
    );

    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();

    let (text, style) = if !state.hint.is_empty() {
        (
            state.hint.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(notice) = &app.notice {
        (notice.clone(), Style::default().fg(Color::Red))
    } else if state.status == GameStatus::Finished {
        if state.is_correct {
            (
                format!("🎉 Got it in {}! Press 'n' for a new game.", state.guess_count()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                format!(
                    "The word was {}. Press 'n' for a new game.",
                    state.secret_word.to_uppercase()
                ),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
        }
    } else {
        (String::new(), Style::default())
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters_used = &app.state().letters_used;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for c in row.chars() {
                let style = letters_used
                    .get(&c)
                    .map_or_else(|| clue_style(Clue::Editing), |&clue| clue_style(clue));
                spans.push(Span::styled(format!(" {} ", c.to_ascii_uppercase()), style));
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keyboard "),
    );

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.state().status {
        GameStatus::Finished => "n: New Game | q: Quit | 4-8: Word Length",
        _ => "Type letters, Enter to guess | 4-8: Word Length | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);

    let guesses_text = format!(
        "Guess {}/{}",
        app.state().guess_count().min(MAX_GUESSES),
        MAX_GUESSES
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);
}
