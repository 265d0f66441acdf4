//! Coloured board printing for the line-based mode

use super::formatters::result_grid;
use crate::core::{Clue, Letter, Row, RowState};
use crate::engine::{GameState, GameStatus, MAX_GUESSES};
use colored::{ColoredString, Colorize};

fn paint_letter(letter: &Letter) -> ColoredString {
    let cell = format!(" {} ", letter.value.to_ascii_uppercase());
    match letter.clue {
        Clue::Correct => cell.black().on_green(),
        Clue::Elsewhere => cell.black().on_yellow(),
        Clue::Absent => cell.white().on_bright_black(),
        Clue::Editing => cell.normal(),
    }
}

fn paint_row(row: &Row, word_length: usize) -> String {
    let mut cells: Vec<String> = row
        .letters
        .iter()
        .map(|letter| paint_letter(letter).to_string())
        .collect();

    while cells.len() < word_length {
        cells.push(" · ".bright_black().to_string());
    }

    cells.join(" ")
}

/// Print the full board, one line per row, with empty slots for unused rows
pub fn print_board(state: &GameState) {
    println!();
    for i in 0..MAX_GUESSES {
        match state.rows.get(i) {
            Some(row) => println!("  {}", paint_row(row, state.word_length)),
            None => {
                let blanks = vec![" · ".bright_black().to_string(); state.word_length];
                println!("  {}", blanks.join(" "));
            }
        }
    }
    println!();
}

/// Print the letters tried so far, coloured by their best clue
pub fn print_letters_used(state: &GameState) {
    if state.letters_used.is_empty() {
        return;
    }

    let mut letters: Vec<(&char, &Clue)> = state.letters_used.iter().collect();
    letters.sort();

    let line: Vec<String> = letters
        .into_iter()
        .map(|(&value, &clue)| paint_letter(&Letter { value, clue }).to_string())
        .collect();

    println!("  Used: {}\n", line.join(" "));
}

/// Print the end-of-game banner with the shareable emoji grid
pub fn print_game_summary(state: &GameState) {
    debug_assert_eq!(state.status, GameStatus::Finished);

    println!();
    if state.is_correct {
        let guesses = state.guess_count();
        println!(
            "{}",
            format!(
                "✅ Got it in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{} The word was {}.",
            "❌ Out of guesses!".red().bold(),
            state.secret_word.to_uppercase().bright_yellow().bold()
        );
    }

    println!("\n{}\n", result_grid(state));
}
