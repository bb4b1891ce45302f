//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Board, GameError, Statistics, Status, Turn};
use crate::store::{GameRecord, JsonFileStore, Outcome, ResultStore};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<'a> {
    pub words: &'a WordSource,
    pub store: JsonFileStore,
    pub board: Board<'a, JsonFileStore>,
    pub max_attempts: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the history can't be read or every word has
    /// already been played.
    pub fn new(words: &'a WordSource, store: JsonFileStore, max_attempts: usize) -> Result<Self> {
        let stats = Statistics::from_records(&store.load_records()?);
        let mut rng = rand::rng();
        let board = Board::start(words, store.clone(), max_attempts, &mut rng)?;

        let mut app = Self {
            words,
            store,
            board,
            max_attempts,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {WORD_LENGTH}-letter word in {} tries!",
                app.board.max_attempts()
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Type a letter into the current guess
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the typed guess to the board
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.board.evaluate(&guess) {
            Ok(turn) => {
                self.input_buffer.clear();
                if turn.status.is_terminal() {
                    self.finish_game(turn);
                }
            }
            Err(GameError::InvalidGuess { source }) => {
                self.add_message(&source.to_string(), MessageStyle::Error);
            }
            Err(e @ GameError::InvalidState { .. }) => {
                error!(error = %e, "Guess submitted to finished board");
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn finish_game(&mut self, turn: Turn) {
        let secret = self
            .board
            .revealed_secret()
            .unwrap_or_default()
            .to_uppercase();
        let attempts = self.board.attempts_used();

        let record = match turn.saved {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                self.add_message(
                    &format!("Could not save result: {e}"),
                    MessageStyle::Error,
                );
                // Still count the game for this session
                GameRecord::today(
                    secret.to_lowercase(),
                    turn.row.text(),
                    turn.status.outcome().unwrap_or(Outcome::Lost),
                    attempts,
                )
            }
            None => return,
        };
        self.stats.add(&record);

        if turn.status == Status::Won {
            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        match Board::start(self.words, self.store.clone(), self.max_attempts, &mut self.rng) {
            Ok(board) => {
                self.board = board;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                info!(error = %e, "Could not start a new game");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
