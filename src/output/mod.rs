//! Terminal output formatting
//!
//! Colored rendering of boards, keyboard hints and history statistics.

pub mod display;
pub mod formatters;

pub use display::{print_alphabet, print_board, print_game_over, print_statistics};
