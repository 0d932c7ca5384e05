//! TUI application state and logic

use crate::game::{Game, GameStatus, KeyInput, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

const PLAY_AGAIN_HINT: &str = "Press 'n' for new game or 'q' to quit.";

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Map a terminal key to a game input
///
/// Digit characters, Enter and Backspace are game keys; everything else is
/// ignored by the game.
#[must_use]
pub fn key_input(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => KeyInput::from_char(c),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the 5 distinct digits in 5 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type digits, Enter to submit, Backspace to delete.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.new_game(),
            code => {
                if let Some(input) = key_input(code) {
                    self.press(input);
                }
            }
        }
    }

    fn press(&mut self, input: KeyInput) {
        let before = self.game.state().history().len();
        let status_before = self.game.status();
        self.game.handle_key_press(input);

        if input == KeyInput::Enter
            && status_before == GameStatus::InPlay
            && self.game.state().history().len() == before
        {
            self.add_message("Not enough digits!", MessageStyle::Error);
            return;
        }

        if status_before.is_terminal() {
            return;
        }

        match self.game.status() {
            GameStatus::Win => {
                self.stats.record(self.game.state());
                let tries = self.game.state().history().len();
                let celebration = match tries {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "😅 PHEW! Got it on the last try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(PLAY_AGAIN_HINT, MessageStyle::Info);
            }
            GameStatus::Lose => {
                self.stats.record(self.game.state());
                let answer = self.game.state().secret().to_string();
                self.add_message(
                    &format!("Out of guesses! It was {answer}."),
                    MessageStyle::Error,
                );
                self.add_message(PLAY_AGAIN_HINT, MessageStyle::Info);
            }
            GameStatus::InPlay => {}
        }
    }

    pub fn new_game(&mut self) {
        self.game.handle_reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("TUI started");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("TUI stopped");

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
