//! Core domain types for the game
//!
//! This module contains the value types and the guess evaluator. Nothing here
//! performs I/O or holds mutable game state.

pub mod alphabet;
mod answer;
mod cell;
mod evaluate;

pub use answer::{Answer, AnswerError};
pub use cell::{Cell, MatchState};
pub use evaluate::evaluate;
