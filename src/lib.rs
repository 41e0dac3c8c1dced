//! Lexis
//!
//! A word-guessing game engine with a terminal front end. Guesses are typed
//! into a grid, evaluated against a hidden answer with correct handling of
//! repeated letters, and aggregated onto a keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use lexis::core::MatchState;
//! use lexis::engine::{Game, SubmitOutcome};
//!
//! let mut game = Game::new(6, 5, "lexis").unwrap();
//! for c in "exxes".chars() {
//!     game.insert_character(c).unwrap();
//! }
//! assert_eq!(game.submit_row(), SubmitOutcome::Continue);
//! assert_eq!(game.key_state('x'), MatchState::Matched);
//! ```

// Core domain types
pub mod core;

// Board, keyboard and game state machine
pub mod engine;

// Validated settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
