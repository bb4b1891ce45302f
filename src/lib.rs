//! Wordle Game
//!
//! A single-player Wordle: guess a secret five-letter word in six tries, with
//! per-letter feedback and a persistent history that keeps secrets from
//! repeating.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Board, Status};
//! use wordle_game::store::MemoryStore;
//! use wordle_game::wordlists::WordSource;
//!
//! let words = WordSource::parse("crane,arose,slate").unwrap();
//! let mut board = Board::with_secret(&words, MemoryStore::new(), "crane", 6).unwrap();
//!
//! let turn = board.evaluate("arose").unwrap();
//! println!("{}", turn.row.to_emoji());
//!
//! let turn = board.evaluate("crane").unwrap();
//! assert_eq!(turn.status, Status::Won);
//! assert_eq!(board.store().records()[0].num_attempts, 2);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Results history
pub mod store;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
