//! TUI application state and logic

use crate::config::GameConfig;
use crate::engine::{Game, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Key bindings shown in the help bar
pub const KEY_HELP: [(&str, &str); 5] = [
    ("a-z", "Set Letter"),
    ("backspace", "Delete Letter"),
    ("enter", "Submit"),
    ("ctrl+r", "Restart"),
    ("ctrl+c/esc", "Quit"),
];

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Delete,
    Submit,
    Restart,
    Quit,
}

/// Decode a key event; unbound keys map to `None`
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Restart),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(Action::Letter(c.to_ascii_lowercase()))
        }
        _ => None,
    }
}

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub game: Game,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot start a game.
    pub fn new(config: &'a GameConfig) -> Result<Self> {
        Ok(Self {
            config,
            game: config.new_game()?,
            should_quit: false,
        })
    }

    /// Apply one decoded action to the game
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the call, which only happens
    /// for letters outside a-z or a broken configuration.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Letter(c) => self.game.insert_character(c)?,
            Action::Delete => self.game.delete_character(),
            Action::Submit => match self.game.submit_row() {
                SubmitOutcome::Ignored => debug!("submit ignored"),
                SubmitOutcome::Continue => debug!("moved to next row"),
                SubmitOutcome::Won => info!("match found"),
                SubmitOutcome::Lost => info!("out of rows"),
            },
            Action::Restart => {
                info!("==== Restarting game ====");
                self.game.restart(Some(self.config.pick_answer()))?;
            }
            Action::Quit => {
                info!("==== Bye! ====");
                self.should_quit = true;
            }
        }

        let (row, col) = self.game.cursor();
        debug!(row, col, string = %self.game.current_guess(), "board");
        Ok(())
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

    info!("==== Starting lexis ====");
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

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
            if let Some(action) = action_for(key) {
                app.handle_action(action)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
