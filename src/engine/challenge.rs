//! Shareable challenge tokens
//!
//! A challenge token is a reversible, URL-safe encoding of a secret word.
//! Decoding a token reproduces the exact original word, including case and
//! character set, with no external lookups, so a puzzle can be pinned and
//! shared across sessions.

use super::error::EngineError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encode a secret word into an opaque, URL-safe token
///
/// # Examples
/// ```
/// use wordrow::engine::challenge;
///
/// let token = challenge::encode("crane");
/// assert_eq!(challenge::decode(&token).unwrap(), "crane");
/// ```
#[must_use]
pub fn encode(word: &str) -> String {
    URL_SAFE_NO_PAD.encode(word.as_bytes())
}

/// Decode a challenge token back into the original word
///
/// # Errors
///
/// Returns [`EngineError::InvalidChallenge`] if the token is not valid
/// URL-safe base64 or does not decode to UTF-8 text.
pub fn decode(token: &str) -> Result<String, EngineError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| EngineError::InvalidChallenge(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| EngineError::InvalidChallenge(e.to_string()))
}
