//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Reads whole-word guesses and feeds them
//! through the same action interface the TUI uses; its "reveal" is simply
//! the next printed board, so `ScoringCompleted` is dispatched immediately
//! after a guess is scored.

use crate::engine::{GameConfig, GameStatus, Key, Session};
use crate::output::{print_board, print_game_summary, print_letters_used};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based mode
///
/// # Errors
///
/// Returns an error if the session cannot be constructed (broken word lists
/// or challenge token) or if reading user input fails.
pub fn run_simple(dictionary: &Dictionary, config: &GameConfig) -> Result<(), String> {
    let mut session = Session::new(dictionary, config).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     W O R D R O W                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        session.state().word_length,
        crate::engine::MAX_GUESSES
    );
    println!("Commands: 'quit', 'new', 'share', or a number 4-8 to change the word length.\n");

    loop {
        print_board(session.state());
        print_letters_used(session.state());

        if session.state().status == GameStatus::Finished {
            print_game_summary(session.state());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    let word_length = session.state().word_length;
                    session.restart(word_length).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input("Guess")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                let word_length = session.state().word_length;
                session.restart(word_length).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "share" => {
                println!("\nChallenge token: {}", session.share_token().bright_cyan());
                println!("Pass it to a friend with --challenge to share this puzzle.\n");
                continue;
            }
            _ => {}
        }

        if let Ok(word_length) = input.parse::<usize>() {
            if (4..=8).contains(&word_length) {
                session.restart(word_length).map_err(|e| e.to_string())?;
                println!("\n🔄 New {word_length}-letter game started!\n");
                continue;
            }
            println!("{}", "Word length must be between 4 and 8.".red());
            continue;
        }

        // A rejected guess leaves its letters in the active row; clear them
        // before typing the next one.
        for _ in 0..session.state().word_length {
            session.on_key_press(Key::Backspace);
        }

        for c in input.chars() {
            session.on_key_press(Key::Char(c));
        }
        session.on_key_press(Key::Enter);

        if !session.state().hint.is_empty() {
            println!("\n{}", session.state().hint.yellow().bold());
            session.on_hint_cleared();
        }

        if session.state().status == GameStatus::Scoring {
            session.on_scoring_completed();
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
