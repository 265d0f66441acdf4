//! Challenge token generation
//!
//! Turns a chosen word into a shareable token so a specific puzzle can be
//! pinned across sessions.

use crate::engine::challenge;
use crate::wordlists::Dictionary;
use colored::Colorize;

/// Build a challenge token for a word, validating it against the word lists
///
/// # Errors
///
/// Returns an error if the word is not plain lowercase letters after
/// normalization, or is not guessable with the loaded word lists (a token
/// nobody could play would only mask sharing bugs).
pub fn challenge_for(dictionary: &Dictionary, word: &str) -> Result<String, String> {
    let word = word.trim().to_lowercase();

    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("'{word}' is not a plain word"));
    }
    if !dictionary.is_guessable(&word) {
        return Err(format!("'{word}' is not in the word lists"));
    }

    Ok(challenge::encode(&word))
}

/// Print a challenge token for the given word
///
/// # Errors
///
/// Propagates the validation errors of [`challenge_for`].
pub fn run_share(dictionary: &Dictionary, word: &str) -> Result<(), String> {
    let token = challenge_for(dictionary, word)?;

    println!(
        "\nChallenge token for {}:",
        word.trim().to_uppercase().bright_yellow().bold()
    );
    println!("\n  {}\n", token.bright_cyan().bold());
    println!("Anyone can play this exact puzzle with:");
    println!("  wordrow play --challenge {token}\n");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dictionary() -> Dictionary {
        Dictionary::new(
            vec!["crane".to_string(), "*vexed".to_string()],
            vec!["slate".to_string(), "vexed".to_string()],
        )
    }

    #[test]
    fn token_round_trips_through_the_challenge_codec() {
        let dictionary = test_dictionary();
        let token = challenge_for(&dictionary, "crane").unwrap();
        assert_eq!(challenge::decode(&token).unwrap(), "crane");
    }

    #[test]
    fn input_is_normalized_before_encoding() {
        let dictionary = test_dictionary();
        assert_eq!(
            challenge_for(&dictionary, "  CRANE "),
            challenge_for(&dictionary, "crane")
        );
    }

    #[test]
    fn unknown_words_are_rejected() {
        let dictionary = test_dictionary();
        assert!(challenge_for(&dictionary, "zzzzz").is_err());
        assert!(challenge_for(&dictionary, "").is_err());
        assert!(challenge_for(&dictionary, "cr4ne").is_err());
    }

    #[test]
    fn accepted_only_words_can_be_shared() {
        let dictionary = test_dictionary();
        assert!(challenge_for(&dictionary, "vexed").is_ok());
    }
}
