//! Interactive TUI interface
//!
//! A ratatui front end that decodes key presses into engine calls and draws
//! the board, keyboard and result bar from the engine's state.

mod app;
mod rendering;

pub use app::{Action, App, KEY_HELP, action_for, run_tui};
pub use rendering::{state_style, ui};
