//! Actions dispatched into the game engine
//!
//! These are the only mutation entry points. Hosts translate whatever input
//! they receive (terminal key events, stdin lines) into these values.

/// A single key forwarded from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submit the active row for scoring
    Enter,
    /// Remove the last letter of the active row
    Backspace,
    /// Type one character; non-alphabetic characters are ignored
    Char(char),
}

/// An action driving one state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key press from the host
    Key(Key),
    /// The host finished presenting the scoring reveal
    ScoringCompleted,
    /// Dismiss the transient hint message
    ClearHint,
    /// Restart the game with a freshly picked secret of the given length
    ChangeWordLength(usize),
}
