//! Wordrow
//!
//! A terminal word-guessing game: find the secret word in six tries, with
//! per-letter clues that handle duplicate letters exactly. Supports seeded
//! puzzles and shareable challenge tokens.
//!
//! # Quick Start
//!
//! ```rust
//! use wordrow::engine::{GameConfig, Key, Session};
//! use wordrow::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut session = Session::new(&dictionary, &GameConfig::default()).unwrap();
//!
//! for c in "crane".chars() {
//!     session.on_key_press(Key::Char(c));
//! }
//! session.on_key_press(Key::Enter);
//! println!("{:?}", session.state().status);
//! ```

// Core domain types
pub mod core;

// The game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
