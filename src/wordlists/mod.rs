//! Word lists for the game
//!
//! Provides the two word lists the game is built on: the candidate secrets
//! (answers) and the broader set of accepted guesses. The embedded lists are
//! compiled into the binary; custom lists can be loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, ANSWERS, ANSWERS_COUNT};

use rustc_hash::FxHashSet;

/// Prefix marking an answer entry that must never be chosen as a secret
pub const EXCLUSION_MARKER: char = '*';

/// The two word lists, loaded once and read-only for the process lifetime
///
/// Answer entries keep their file order (seeded secret selection indexes into
/// it) and keep any leading [`EXCLUSION_MARKER`]. Marked entries are skipped
/// during secret selection; whether the same word is guessable depends only
/// on it appearing unmarked in either list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<String>,
    answer_set: FxHashSet<String>,
    accepted: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw answer entries and accepted guess words
    #[must_use]
    pub fn new(answers: Vec<String>, accepted: Vec<String>) -> Self {
        let answer_set = answers
            .iter()
            .filter(|entry| !entry.starts_with(EXCLUSION_MARKER))
            .cloned()
            .collect();

        Self {
            answers,
            answer_set,
            accepted: accepted.into_iter().collect(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ACCEPTED),
        )
    }

    /// Candidate secrets of exactly `word_length`, in file order
    ///
    /// Entries carrying the exclusion marker are filtered out.
    #[must_use]
    pub fn candidates(&self, word_length: usize) -> Vec<&str> {
        self.answers
            .iter()
            .filter(|entry| !entry.starts_with(EXCLUSION_MARKER) && entry.len() == word_length)
            .map(String::as_str)
            .collect()
    }

    /// Whether a word may be played as a guess
    ///
    /// A word is guessable if it appears unmarked in the answer list or
    /// anywhere in the accepted list.
    #[must_use]
    pub fn is_guessable(&self, word: &str) -> bool {
        self.answer_set.contains(word) || self.accepted.contains(word)
    }

    /// Iterate over every accepted guess word
    pub fn accepted_words(&self) -> impl Iterator<Item = &str> {
        self.accepted.iter().map(String::as_str)
    }

    /// Number of raw answer entries, marked ones included
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guess words
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}
