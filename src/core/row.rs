//! Guess rows and their letters

use super::Clue;

/// Lifecycle of a single guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// The row is being typed into
    Editing,
    /// The row has been scored and is waiting for the host's reveal to finish
    Pending,
    /// The row is finalized and can no longer change
    Locked,
}

/// One letter in a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    /// The lowercase letter value
    pub value: char,
    /// Feedback for this letter; `Editing` until the row is scored
    pub clue: Clue,
}

impl Letter {
    /// Create a fresh, unscored letter
    #[inline]
    #[must_use]
    pub const fn new(value: char) -> Self {
        Self {
            value,
            clue: Clue::Editing,
        }
    }
}

/// A single guess row
///
/// Holds up to `word_length` letters while editing, exactly `word_length`
/// once submitted. `is_valid_word` is only computed the moment the row
/// becomes full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub letters: Vec<Letter>,
    pub is_valid_word: bool,
    pub state: RowState,
}

impl Row {
    /// Create an empty row ready for typing
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
            is_valid_word: false,
            state: RowState::Editing,
        }
    }

    /// The letters joined into a plain word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|letter| letter.value).collect()
    }

    /// Whether the row holds a full word of the given length
    #[inline]
    #[must_use]
    pub fn is_full(&self, word_length: usize) -> bool {
        self.letters.len() == word_length
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}
