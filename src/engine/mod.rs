//! Board state and game progress
//!
//! The engine is single-threaded and performs no I/O. Hosts drive it through
//! [`Game`] and read back its state for rendering.

mod board;
mod game;
mod keys;

pub use board::Board;
pub use game::{Game, GameError, GameStatus, SubmitOutcome};
pub use keys::KeyStates;
