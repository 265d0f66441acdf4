//! Letter-by-letter guess scoring
//!
//! Implements the two-pass scoring rules, including proper handling of
//! duplicate letters: a guessed letter never earns more `Elsewhere`/`Correct`
//! clues than its true number of occurrences in the secret.

use super::Clue;

/// Score a full guess against the secret word
///
/// # Algorithm
/// 1. Build the "elusive" pool: the multiset of secret letters at positions
///    the guess did not match exactly, duplicates preserved.
/// 2. Walk the guess left to right: an exact match is `Correct`; otherwise a
///    letter still present in the pool is `Elsewhere` and consumes exactly
///    one occurrence; anything else is `Absent`.
///
/// Both words must have the same number of characters.
///
/// # Examples
/// ```
/// use wordrow::core::{Clue, score};
///
/// let clues = score("candy", "crane");
/// assert_eq!(
///     clues,
///     [Clue::Correct, Clue::Elsewhere, Clue::Elsewhere, Clue::Absent, Clue::Absent]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> Vec<Clue> {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();
    debug_assert_eq!(guess.len(), secret.len(), "guess and secret length mismatch");

    // Secret letters not matched in place; these are the only occurrences an
    // out-of-position letter may claim.
    let mut elusive: Vec<char> = secret
        .iter()
        .zip(&guess)
        .filter(|(s, g)| s != g)
        .map(|(s, _)| *s)
        .collect();

    guess
        .iter()
        .zip(&secret)
        .map(|(&guessed, &actual)| {
            if guessed == actual {
                Clue::Correct
            } else if let Some(pos) = elusive.iter().position(|&c| c == guessed) {
                elusive.swap_remove(pos);
                Clue::Elsewhere
            } else {
                Clue::Absent
            }
        })
        .collect()
}
