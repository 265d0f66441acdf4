//! Game state snapshot
//!
//! The full game state, replaced wholesale by every accepted transition.
//! Hosts hold a reference to the current snapshot and re-render from it;
//! they never mutate it.

use crate::core::{Clue, Row};
use rustc_hash::FxHashMap;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Default secret word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Top-level phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting key input into the active row
    Guessing,
    /// A row has been scored; waiting for the host's reveal to finish
    Scoring,
    /// The game is over; the state no longer changes
    Finished,
}

/// Immutable snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The secret word; fixed for the session
    pub secret_word: String,
    /// Number of letters per guess, derived from the secret
    pub word_length: usize,
    /// Guess rows in chronological order; grows by one per finalized guess
    pub rows: Vec<Row>,
    /// Best clue seen so far for each typed letter
    pub letters_used: FxHashMap<char, Clue>,
    /// Index of the row currently being edited
    pub active_row: usize,
    /// Transient user-facing message; empty when none
    pub hint: String,
    /// Current phase
    pub status: GameStatus,
    /// Whether the most recently scored guess matched the secret exactly
    pub is_correct: bool,
}

impl GameState {
    /// Fresh state for a new game around the given secret
    #[must_use]
    pub fn new(secret_word: String) -> Self {
        let word_length = secret_word.chars().count();
        Self {
            secret_word,
            word_length,
            rows: vec![Row::new()],
            letters_used: FxHashMap::default(),
            active_row: 0,
            hint: String::new(),
            status: GameStatus::Guessing,
            is_correct: false,
        }
    }

    /// The row currently being edited
    #[must_use]
    pub fn current_row(&self) -> &Row {
        &self.rows[self.active_row]
    }

    /// Number of guesses started so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rows.len()
    }
}
