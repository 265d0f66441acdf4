//! Terminal output formatting
//!
//! Display utilities for the line-based mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_summary, print_letters_used};
pub use formatters::{clue_to_emoji, result_grid};
