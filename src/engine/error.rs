//! Engine error type

use std::fmt;

/// Errors surfaced at session construction or restart
///
/// User-input rejection (too-short or unrecognized guesses) is never an
/// error; it is absorbed into the state's hint. These variants cover broken
/// configuration instead, and fail fast at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The answer list has no usable secret of the requested length
    NoCandidates { word_length: usize },
    /// A supplied challenge token could not be decoded into a usable word
    InvalidChallenge(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { word_length } => {
                write!(f, "No candidate secret words of length {word_length}")
            }
            Self::InvalidChallenge(reason) => {
                write!(f, "Invalid challenge token: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
