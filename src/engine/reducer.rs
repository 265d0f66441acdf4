//! The game state transition function
//!
//! A pure reducer: every accepted action maps the current snapshot to a new
//! one. Nothing here mutates in place across snapshots and nothing here
//! schedules timers; the host decides when a scoring reveal has finished and
//! dispatches [`Action::ScoringCompleted`].

use super::action::{Action, Key};
use super::state::{GameState, GameStatus, MAX_GUESSES};
use crate::core::{Clue, Letter, Row, RowState, score};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;

/// Hint shown when Enter is pressed on a partial row
pub const HINT_TOO_SHORT: &str = "Too short";

/// Hint shown when a full row is not a recognized word
pub const HINT_NOT_A_WORD: &str = "Not a valid word";

/// Apply one action to the state, producing the next snapshot
///
/// `ChangeWordLength` is the one action not handled here: a restart draws a
/// fresh secret, so it is routed through the session, which owns the
/// dictionary and the entropy source.
#[must_use]
pub fn reduce(dictionary: &Dictionary, state: &GameState, action: &Action) -> GameState {
    match action {
        Action::Key(key) => on_key(dictionary, state, *key),
        Action::ScoringCompleted => on_scoring_completed(state),
        Action::ClearHint => clear_hint(state),
        Action::ChangeWordLength(_) => state.clone(),
    }
}

fn on_key(dictionary: &Dictionary, state: &GameState, key: Key) -> GameState {
    // Hosts gate input during Scoring and Finished; the engine stays inert
    // here as well so stray key presses can never corrupt a settled game.
    if state.status != GameStatus::Guessing {
        return state.clone();
    }

    match key {
        Key::Enter => score_active_row(state),
        Key::Backspace => remove_letter(state),
        Key::Char(c) => {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() {
                add_letter(dictionary, state, c)
            } else {
                state.clone()
            }
        }
    }
}

fn add_letter(dictionary: &Dictionary, state: &GameState, letter: char) -> GameState {
    if state.current_row().is_full(state.word_length) {
        return state.clone();
    }

    let mut next = state.clone();
    let word_length = next.word_length;
    let row = &mut next.rows[next.active_row];

    row.letters.push(Letter::new(letter));

    // Validity is only meaningful once the row holds a full word
    if row.is_full(word_length) {
        row.is_valid_word = dictionary.is_guessable(&row.word());
    }

    next
}

fn remove_letter(state: &GameState) -> GameState {
    let mut next = state.clone();
    let row = &mut next.rows[next.active_row];

    row.letters.pop();
    row.is_valid_word = false;

    next
}

fn score_active_row(state: &GameState) -> GameState {
    let row = state.current_row();

    if !row.is_valid_word {
        let hint = if row.letters.len() < state.word_length {
            HINT_TOO_SHORT
        } else {
            HINT_NOT_A_WORD
        };
        return set_hint(state, hint);
    }

    let clues = score(&row.word(), &state.secret_word);

    let mut next = state.clone();
    let active = next.active_row;
    {
        let row = &mut next.rows[active];
        for (letter, clue) in row.letters.iter_mut().zip(&clues) {
            letter.clue = *clue;
        }
        row.state = RowState::Pending;
    }

    update_letters_used(&mut next.letters_used, &next.rows[active]);

    next.is_correct = clues.iter().all(|clue| *clue == Clue::Correct);
    next.status = GameStatus::Scoring;
    next
}

fn update_letters_used(letters_used: &mut FxHashMap<char, Clue>, row: &Row) {
    for letter in &row.letters {
        let best = letters_used.entry(letter.value).or_insert(letter.clue);
        if *best < letter.clue {
            *best = letter.clue;
        }
    }
}

fn on_scoring_completed(state: &GameState) -> GameState {
    if state.status != GameStatus::Scoring {
        return state.clone();
    }

    let mut next = state.clone();
    next.rows[next.active_row].state = RowState::Locked;

    if next.is_correct || next.rows.len() == MAX_GUESSES {
        next.status = GameStatus::Finished;
    } else {
        next.rows.push(Row::new());
        next.active_row += 1;
        next.status = GameStatus::Guessing;
    }

    next
}

fn set_hint(state: &GameState, hint: &str) -> GameState {
    let mut next = state.clone();
    next.hint = hint.to_string();
    next
}

fn clear_hint(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.hint.clear();
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dictionary() -> Dictionary {
        Dictionary::new(
            vec![
                "crane".to_string(),
                "candy".to_string(),
                "speed".to_string(),
                "erase".to_string(),
                "slate".to_string(),
            ],
            vec!["geese".to_string(), "irate".to_string()],
        )
    }

    fn type_word(dictionary: &Dictionary, state: GameState, word: &str) -> GameState {
        word.chars().fold(state, |state, c| {
            reduce(dictionary, &state, &Action::Key(Key::Char(c)))
        })
    }

    fn press(dictionary: &Dictionary, state: GameState, key: Key) -> GameState {
        reduce(dictionary, &state, &Action::Key(key))
    }

    /// Type a word, submit it, and let the reveal complete
    fn play_guess(dictionary: &Dictionary, state: GameState, word: &str) -> GameState {
        let state = type_word(dictionary, state, word);
        let state = press(dictionary, state, Key::Enter);
        reduce(dictionary, &state, &Action::ScoringCompleted)
    }

    #[test]
    fn typing_fills_the_active_row() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "can");

        assert_eq!(state.current_row().word(), "can");
        assert!(
            state
                .current_row()
                .letters
                .iter()
                .all(|l| l.clue == Clue::Editing)
        );
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "CaNdY");
        assert_eq!(state.current_row().word(), "candy");
    }

    #[test]
    fn non_alphabetic_keys_are_ignored() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());
        let state = type_word(&dictionary, state, "ca");

        for c in ['1', ' ', '!', 'é', '-'] {
            let next = press(&dictionary, state.clone(), Key::Char(c));
            assert_eq!(next, state, "key {c:?} should not change the state");
        }
    }

    #[test]
    fn active_row_never_exceeds_word_length() {
        let dictionary = test_dictionary();
        let state = type_word(
            &dictionary,
            GameState::new("crane".to_string()),
            "candyextra",
        );
        assert_eq!(state.current_row().letters.len(), 5);
        assert_eq!(state.current_row().word(), "candy");
    }

    #[test]
    fn validity_computed_when_row_becomes_full() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());

        let partial = type_word(&dictionary, state.clone(), "cand");
        assert!(!partial.current_row().is_valid_word);

        let full = type_word(&dictionary, state.clone(), "candy");
        assert!(full.current_row().is_valid_word);

        let gibberish = type_word(&dictionary, state, "zzzzz");
        assert!(!gibberish.current_row().is_valid_word);
    }

    #[test]
    fn accepted_only_words_are_valid_guesses() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "irate");
        assert!(state.current_row().is_valid_word);
    }

    #[test]
    fn backspace_removes_last_letter_and_clears_validity() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "candy");
        assert!(state.current_row().is_valid_word);

        let state = press(&dictionary, state, Key::Backspace);
        assert_eq!(state.current_row().word(), "cand");
        assert!(!state.current_row().is_valid_word);
    }

    #[test]
    fn backspace_on_empty_row_is_harmless() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());
        let next = press(&dictionary, state.clone(), Key::Backspace);
        assert_eq!(next, state);
    }

    #[test]
    fn enter_on_short_row_sets_hint_only() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "can");
        let next = press(&dictionary, state.clone(), Key::Enter);

        assert_eq!(next.hint, HINT_TOO_SHORT);
        assert_eq!(next.status, GameStatus::Guessing);
        assert_eq!(next.active_row, state.active_row);
        assert_eq!(next.rows.len(), state.rows.len());
        assert_eq!(next.current_row().state, RowState::Editing);
    }

    #[test]
    fn enter_on_unrecognized_word_sets_hint_only() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "zzzzz");
        let next = press(&dictionary, state, Key::Enter);

        assert_eq!(next.hint, HINT_NOT_A_WORD);
        assert_eq!(next.status, GameStatus::Guessing);
        assert_eq!(next.current_row().state, RowState::Editing);
        assert_eq!(next.current_row().word(), "zzzzz");
    }

    #[test]
    fn scoring_marks_row_pending_and_assigns_clues() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "candy");
        let state = press(&dictionary, state, Key::Enter);

        assert_eq!(state.status, GameStatus::Scoring);
        assert!(!state.is_correct);

        let row = &state.rows[0];
        assert_eq!(row.state, RowState::Pending);
        let clues: Vec<Clue> = row.letters.iter().map(|l| l.clue).collect();
        assert_eq!(
            clues,
            vec![
                Clue::Correct,
                Clue::Elsewhere,
                Clue::Elsewhere,
                Clue::Absent,
                Clue::Absent
            ]
        );
    }

    #[test]
    fn correct_guess_sets_is_correct() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "crane");
        let state = press(&dictionary, state, Key::Enter);

        assert!(state.is_correct);
        assert_eq!(state.status, GameStatus::Scoring);
    }

    #[test]
    fn duplicate_letters_scored_through_elusive_pool() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("erase".to_string()), "geese");
        let state = press(&dictionary, state, Key::Enter);

        let clues: Vec<Clue> = state.rows[0].letters.iter().map(|l| l.clue).collect();
        assert_eq!(
            clues,
            vec![
                Clue::Absent,
                Clue::Elsewhere,
                Clue::Absent,
                Clue::Correct,
                Clue::Correct
            ]
        );
    }

    #[test]
    fn letters_used_keeps_best_clue_per_letter() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());

        // "speed": the first e is Elsewhere; the second e scores Absent but
        // cannot drag the tracked clue back down
        let state = play_guess(&dictionary, state, "speed");
        assert_eq!(state.letters_used.get(&'e'), Some(&Clue::Elsewhere));
        assert_eq!(state.letters_used.get(&'s'), Some(&Clue::Absent));
        assert_eq!(state.letters_used.get(&'p'), Some(&Clue::Absent));

        // "erase": e lands in place at position 4 and upgrades to Correct
        let state = play_guess(&dictionary, state, "erase");
        assert_eq!(state.letters_used.get(&'e'), Some(&Clue::Correct));
        assert_eq!(state.letters_used.get(&'r'), Some(&Clue::Correct));
        assert_eq!(state.letters_used.get(&'a'), Some(&Clue::Correct));

        // "candy": a scores Elsewhere here, but a letter already Correct is
        // never downgraded
        let state = play_guess(&dictionary, state, "candy");
        assert_eq!(state.letters_used.get(&'a'), Some(&Clue::Correct));
        assert_eq!(state.letters_used.get(&'c'), Some(&Clue::Correct));
        assert_eq!(state.letters_used.get(&'n'), Some(&Clue::Elsewhere));
    }

    #[test]
    fn letters_used_never_stores_editing() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "can");
        assert!(state.letters_used.is_empty());
    }

    #[test]
    fn scoring_completed_locks_row_and_opens_next() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "candy");
        let state = press(&dictionary, state, Key::Enter);
        let state = reduce(&dictionary, &state, &Action::ScoringCompleted);

        assert_eq!(state.rows[0].state, RowState::Locked);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.active_row, 1);
        assert_eq!(state.status, GameStatus::Guessing);
        assert_eq!(state.rows[1].state, RowState::Editing);
    }

    #[test]
    fn scoring_completed_out_of_phase_is_inert() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());
        let next = reduce(&dictionary, &state, &Action::ScoringCompleted);
        assert_eq!(next, state);
    }

    #[test]
    fn keys_during_scoring_are_inert() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "candy");
        let state = press(&dictionary, state, Key::Enter);
        assert_eq!(state.status, GameStatus::Scoring);

        for key in [Key::Enter, Key::Backspace, Key::Char('x')] {
            let next = press(&dictionary, state.clone(), key);
            assert_eq!(next, state);
        }
    }

    #[test]
    fn correct_guess_finishes_the_game() {
        let dictionary = test_dictionary();
        let state = GameState::new("crane".to_string());
        let state = play_guess(&dictionary, state, "crane");

        assert_eq!(state.status, GameStatus::Finished);
        assert!(state.is_correct);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].state, RowState::Locked);
    }

    #[test]
    fn win_on_final_row_adds_no_extra_row() {
        let dictionary = test_dictionary();
        let mut state = GameState::new("crane".to_string());

        for _ in 0..MAX_GUESSES - 1 {
            state = play_guess(&dictionary, state, "candy");
        }
        assert_eq!(state.rows.len(), MAX_GUESSES);
        assert_eq!(state.status, GameStatus::Guessing);

        state = play_guess(&dictionary, state, "crane");
        assert_eq!(state.status, GameStatus::Finished);
        assert!(state.is_correct);
        assert_eq!(state.rows.len(), MAX_GUESSES);
    }

    #[test]
    fn sixth_wrong_guess_finishes_the_game() {
        let dictionary = test_dictionary();
        let mut state = GameState::new("crane".to_string());

        for _ in 0..MAX_GUESSES {
            state = play_guess(&dictionary, state, "candy");
        }

        assert_eq!(state.status, GameStatus::Finished);
        assert!(!state.is_correct);
        assert_eq!(state.rows.len(), MAX_GUESSES);
    }

    #[test]
    fn finished_game_ignores_all_keys() {
        let dictionary = test_dictionary();
        let state = play_guess(&dictionary, GameState::new("crane".to_string()), "crane");
        assert_eq!(state.status, GameStatus::Finished);

        for key in [Key::Enter, Key::Backspace, Key::Char('a')] {
            let next = press(&dictionary, state.clone(), key);
            assert_eq!(next, state);
        }
        let next = reduce(&dictionary, &state, &Action::ScoringCompleted);
        assert_eq!(next, state);
    }

    #[test]
    fn clear_hint_is_idempotent() {
        let dictionary = test_dictionary();
        let state = type_word(&dictionary, GameState::new("crane".to_string()), "can");
        let state = press(&dictionary, state, Key::Enter);
        assert_eq!(state.hint, HINT_TOO_SHORT);

        let once = reduce(&dictionary, &state, &Action::ClearHint);
        assert!(once.hint.is_empty());

        let twice = reduce(&dictionary, &once, &Action::ClearHint);
        assert_eq!(twice, once);
    }

    #[test]
    fn transitions_never_alias_the_previous_snapshot() {
        let dictionary = test_dictionary();
        let before = type_word(&dictionary, GameState::new("crane".to_string()), "cand");
        let snapshot = before.clone();

        let after = press(&dictionary, before.clone(), Key::Char('y'));
        assert_eq!(before, snapshot, "previous snapshot must be untouched");
        assert_ne!(after, before);
    }

    #[test]
    fn exactly_one_editing_row_until_finished() {
        let dictionary = test_dictionary();
        let mut state = GameState::new("crane".to_string());

        for _ in 0..MAX_GUESSES {
            let editing = state
                .rows
                .iter()
                .filter(|row| row.state == RowState::Editing)
                .count();
            assert_eq!(editing, 1);
            state = play_guess(&dictionary, state, "candy");
        }

        assert_eq!(state.status, GameStatus::Finished);
        assert!(state.rows.iter().all(|row| row.state == RowState::Locked));
    }
}
