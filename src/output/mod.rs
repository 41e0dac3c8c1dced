//! Terminal output formatting
//!
//! Presentation helpers that turn engine state into text. The engine itself
//! never knows about colours or symbols.

pub mod display;
pub mod formatters;

pub use display::{print_keyboard, print_outcome, print_row};
pub use formatters::{KEYBOARD_ROWS, row_to_emoji, state_emoji};
