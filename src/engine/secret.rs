//! Secret word selection
//!
//! Picks a secret from the answer list, either with the platform's
//! general-purpose randomness or fully deterministically from a numeric
//! seed, so that a seeded game is exactly reproducible.

use super::error::EngineError;
use crate::wordlists::Dictionary;
use rand::prelude::IndexedRandom;

/// Deterministic 32-bit mixing generator (mulberry32)
///
/// Each call advances the state by a fixed odd constant and runs two
/// xor-shift/multiply rounds, producing a value in `[0, 1)`. The stream is
/// bit-exact reproducible from an equal seed, which is what makes seeded
/// puzzles shareable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a seed
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`
    ///
    /// All arithmetic is wrapping 32-bit; the final word is normalized by
    /// dividing by 2^32.
    pub fn next_value(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

/// Pick a secret word of the given length
///
/// With a seeded generator the index into the file-ordered candidate list is
/// `floor(len * value)`; without one, the thread-local generator chooses.
///
/// # Errors
///
/// Returns [`EngineError::NoCandidates`] if the answer list holds no usable
/// word of the requested length. This is a configuration error and must not
/// be papered over with a default.
pub fn pick_secret_word(
    dictionary: &Dictionary,
    word_length: usize,
    seeded: Option<&mut Mulberry32>,
) -> Result<String, EngineError> {
    let candidates = dictionary.candidates(word_length);

    let picked = match seeded {
        Some(rng) => {
            let index = (candidates.len() as f64 * rng.next_value()) as usize;
            candidates.get(index).copied()
        }
        None => candidates.choose(&mut rand::rng()).copied(),
    };

    picked
        .map(str::to_string)
        .ok_or(EngineError::NoCandidates { word_length })
}
