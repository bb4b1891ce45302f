//! TUI rendering with ratatui
//!
//! Board grid, keyboard hints, messages and session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Alphabet, Color as Feedback, Word};
use crate::game::Status;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Keyboard rows for the hint panel
const KEYBOARD: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Hints and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile style for a feedback colour
#[must_use]
pub fn tile_style(color: Feedback) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match color {
        Feedback::Correct => base.fg(Color::Black).bg(Color::Green),
        Feedback::Present => base.fg(Color::Black).bg(Color::Yellow),
        Feedback::Absent => base.fg(Color::White).bg(Color::DarkGray),
        Feedback::Unknown => base.fg(Color::White),
    }
}

/// One board row as spaced tiles
#[must_use]
pub fn row_line(row: &Word) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.letters().len() * 2);
    for (ch, color) in row.cells() {
        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase()),
            tile_style(color),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The current guess being typed, padded with placeholders
#[must_use]
pub fn typing_line(input: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for ch in input
        .chars()
        .chain(std::iter::repeat('_'))
        .take(crate::core::WORD_LENGTH)
    {
        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Keyboard hint rows coloured by the best feedback seen
#[must_use]
pub fn keyboard_lines(alphabet: &Alphabet) -> Vec<Line<'static>> {
    KEYBOARD
        .iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .chars()
                .flat_map(|ch| {
                    [
                        Span::styled(
                            format!(" {} ", ch.to_ascii_uppercase()),
                            tile_style(alphabet.color_of(ch)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = &app.board;
    let typing_row = (!board.is_over()).then_some(board.attempts_used());

    let mut lines = vec![Line::from("")];
    for (i, row) in board.rows().iter().enumerate() {
        if Some(i) == typing_row {
            lines.push(typing_line(&app.input_buffer));
        } else {
            lines.push(row_line(row));
        }
        lines.push(Line::from(""));
    }

    if let Some(secret) = board.revealed_secret() {
        let color = if board.status() == Status::Won {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            format!("The word was {}", secret.to_uppercase()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Keyboard
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Statistics
        ])
        .split(area);

    let keyboard = Paragraph::new(keyboard_lines(app.board.alphabet())).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, chunks[0]);

    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_statistics(f, app, chunks[3]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.board.attempts_used();
    let max = app.board.max_attempts();
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![Line::from(format!(
        "Played: {} | Win Rate: {:.0}% | Streak: {} (max {})",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    ))];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for attempts in 1..=app.board.max_attempts() {
        let count = stats.wins_in(attempts);
        let width = if most == 0 { 0 } else { count * 20 / most };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Backspace to delete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let status_text = format!("Status: {}", app.board.status());
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let words_text = format!("Words: {}", app.words.len());
    f.render_widget(
        Paragraph::new(words_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
