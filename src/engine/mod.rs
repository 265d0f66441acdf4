//! The game engine
//!
//! Owns the game state and every rule of the game: secret selection, guess
//! validation, scoring, turn progression, and terminal-state detection.
//! Hosts drive it exclusively through [`Action`] values and re-render from
//! the [`GameState`] snapshot.

mod action;
pub mod challenge;
mod error;
mod reducer;
mod secret;
mod session;
mod state;

pub use action::{Action, Key};
pub use error::EngineError;
pub use reducer::{HINT_NOT_A_WORD, HINT_TOO_SHORT, reduce};
pub use secret::{Mulberry32, pick_secret_word};
pub use session::{GameConfig, Session};
pub use state::{DEFAULT_WORD_LENGTH, GameState, GameStatus, MAX_GUESSES};
