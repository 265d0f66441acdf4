//! TUI application state and logic

use crate::engine::{Action, GameState, GameStatus, Key as GameKey, MAX_GUESSES, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between revealing consecutive letters of a scored row
const REVEAL_STEP: Duration = Duration::from_millis(500);

/// How long a hint stays on screen before it is cleared
const HINT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Event poll granularity; also paces the animation ticks
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Progress of the letter-reveal animation over the row being scored
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    /// Number of letters whose clue is already visible
    pub shown: usize,
    last_step: Instant,
}

impl Reveal {
    fn start() -> Self {
        Self {
            shown: 0,
            last_step: Instant::now(),
        }
    }
}

/// Per-process play statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub reveal: Option<Reveal>,
    pub notice: Option<String>,
    pub stats: Statistics,
    pub should_quit: bool,
    hint_since: Option<Instant>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self {
            session,
            reveal: None,
            notice: None,
            stats: Statistics::default(),
            should_quit: false,
            hint_since: None,
        }
    }

    /// The engine's current snapshot
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Translate a terminal key event into engine actions
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        // Digits restart at a new length; they never collide with typing
        if let KeyCode::Char(c @ '4'..='8') = code {
            let word_length = c as usize - '0' as usize;
            self.restart(word_length);
            return;
        }

        match self.state().status {
            GameStatus::Guessing => {
                let key = match code {
                    KeyCode::Enter => Some(GameKey::Enter),
                    KeyCode::Backspace => Some(GameKey::Backspace),
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(GameKey::Char(c)),
                    _ => None,
                };
                if let Some(key) = key {
                    self.notice = None;
                    self.session.on_key_press(key);
                    self.sync_hint();
                }
            }
            // The keyboard is disabled while the reveal runs
            GameStatus::Scoring => {}
            GameStatus::Finished => match code {
                KeyCode::Char('n') => {
                    let word_length = self.state().word_length;
                    self.restart(word_length);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Advance time-based behavior: the reveal animation and hint expiry
    pub fn tick(&mut self) {
        self.tick_reveal();

        if let Some(since) = self.hint_since
            && since.elapsed() >= HINT_TIMEOUT
        {
            self.session.on_hint_cleared();
            self.hint_since = None;
        }
    }

    fn tick_reveal(&mut self) {
        if self.state().status != GameStatus::Scoring {
            return;
        }
        let word_length = self.state().word_length;

        let Some(reveal) = self.reveal else {
            self.reveal = Some(Reveal::start());
            return;
        };

        if reveal.last_step.elapsed() < REVEAL_STEP {
            return;
        }

        if reveal.shown < word_length {
            self.reveal = Some(Reveal {
                shown: reveal.shown + 1,
                last_step: Instant::now(),
            });
        } else {
            // Reveal finished; only now does the engine advance the turn
            self.reveal = None;
            self.session.on_scoring_completed();
            if self.state().status == GameStatus::Finished {
                self.record_finish();
            }
        }
    }

    fn restart(&mut self, word_length: usize) {
        match self.session.dispatch(&Action::ChangeWordLength(word_length)) {
            Ok(()) => {
                self.reveal = None;
                self.notice = None;
                self.hint_since = None;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn sync_hint(&mut self) {
        if self.state().hint.is_empty() {
            self.hint_since = None;
        } else if self.hint_since.is_none() {
            self.hint_since = Some(Instant::now());
        }
    }

    fn record_finish(&mut self) {
        self.stats.total_games += 1;
        if self.state().is_correct {
            self.stats.games_won += 1;
            let guesses = self.state().guess_count();
            if guesses <= MAX_GUESSES {
                self.stats.guess_distribution[guesses] += 1;
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
