//! Formatting utilities for terminal output

use crate::core::{Clue, RowState};
use crate::engine::GameState;

/// Emoji square for one clue
#[must_use]
pub const fn clue_to_emoji(clue: Clue) -> char {
    match clue {
        Clue::Correct => '🟩',
        Clue::Elsewhere => '🟨',
        Clue::Absent | Clue::Editing => '⬜',
    }
}

/// Shareable emoji grid of every locked row, one line per guess
///
/// # Examples
/// ```
/// use wordrow::output::formatters::result_grid;
/// use wordrow::engine::GameState;
///
/// let state = GameState::new("crane".to_string());
/// assert!(result_grid(&state).is_empty());
/// ```
#[must_use]
pub fn result_grid(state: &GameState) -> String {
    state
        .rows
        .iter()
        .filter(|row| row.state == RowState::Locked)
        .map(|row| {
            row.letters
                .iter()
                .map(|letter| clue_to_emoji(letter.clue))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
