//! Game session
//!
//! The session owns the live game state and is the single place actions
//! enter the engine. It also owns everything a restart needs: the dictionary
//! reference and the optional seeded generator. Configuration is explicit —
//! a [`GameConfig`] passed at construction — rather than read from ambient
//! environment state.

use super::action::{Action, Key};
use super::challenge;
use super::error::EngineError;
use super::reducer::reduce;
use super::secret::{Mulberry32, pick_secret_word};
use super::state::{DEFAULT_WORD_LENGTH, GameState};
use crate::wordlists::Dictionary;

/// Construction-time configuration for a session
///
/// `challenge` pins the secret to a shared token and wins over both `seed`
/// and `word_length`; `seed` makes selection deterministic; otherwise the
/// secret is drawn from the platform's general-purpose randomness.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Secret length to play at; ignored when a challenge token is given
    pub word_length: usize,
    /// Optional seed for deterministic secret selection
    pub seed: Option<u32>,
    /// Optional challenge token pinning the exact secret
    pub challenge: Option<String>,
}

impl GameConfig {
    /// Configuration for a plain random game of the given length
    #[must_use]
    pub fn with_length(word_length: usize) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }
}

/// A live game owned by one host
///
/// Hosts dispatch actions and re-read the snapshot; every transition
/// replaces the state wholesale.
#[derive(Debug)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    rng: Option<Mulberry32>,
    state: GameState,
}

impl<'a> Session<'a> {
    /// Start a new game
    ///
    /// # Errors
    ///
    /// Fails fast on broken configuration: a challenge token that does not
    /// decode to a usable word ([`EngineError::InvalidChallenge`]), or an
    /// answer list with no candidate of the requested length
    /// ([`EngineError::NoCandidates`]).
    pub fn new(dictionary: &'a Dictionary, config: &GameConfig) -> Result<Self, EngineError> {
        let mut rng = config.seed.map(Mulberry32::new);

        let secret = if let Some(token) = &config.challenge {
            let word = challenge::decode(token)?;
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(EngineError::InvalidChallenge(
                    "token does not decode to a lowercase word".to_string(),
                ));
            }
            word
        } else {
            let word_length = if config.word_length == 0 {
                DEFAULT_WORD_LENGTH
            } else {
                config.word_length
            };
            pick_secret_word(dictionary, word_length, rng.as_mut())?
        };

        log::debug!("session started with a {}-letter secret", secret.len());

        Ok(Self {
            dictionary,
            rng,
            state: GameState::new(secret),
        })
    }

    /// The current state snapshot
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Dispatch one action
    ///
    /// # Errors
    ///
    /// Only `ChangeWordLength` can fail (no candidates of the new length);
    /// the current game is left untouched in that case. All other actions
    /// are infallible.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), EngineError> {
        if let Action::ChangeWordLength(word_length) = action {
            return self.restart(*word_length);
        }

        self.state = reduce(self.dictionary, &self.state, action);
        Ok(())
    }

    /// Forward a key press
    pub fn on_key_press(&mut self, key: Key) {
        self.state = reduce(self.dictionary, &self.state, &Action::Key(key));
    }

    /// Tell the engine the host finished its scoring reveal
    pub fn on_scoring_completed(&mut self) {
        self.state = reduce(self.dictionary, &self.state, &Action::ScoringCompleted);
    }

    /// Dismiss the transient hint
    pub fn on_hint_cleared(&mut self) {
        self.state = reduce(self.dictionary, &self.state, &Action::ClearHint);
    }

    /// Throw the current game away and start over at the given length
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoCandidates`] if the answer list has no word
    /// of the requested length; the current game is left untouched.
    pub fn restart(&mut self, word_length: usize) -> Result<(), EngineError> {
        let secret = pick_secret_word(self.dictionary, word_length, self.rng.as_mut())?;
        log::debug!("restarting with a {}-letter secret", secret.len());
        self.state = GameState::new(secret);
        Ok(())
    }

    /// Challenge token pinning this game's secret
    #[must_use]
    pub fn share_token(&self) -> String {
        challenge::encode(&self.state.secret_word)
    }
}
