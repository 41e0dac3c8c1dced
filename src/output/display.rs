//! Coloured printing for the line mode

use super::formatters::{KEYBOARD_ROWS, row_to_emoji};
use crate::core::{Cell, MatchState};
use crate::engine::{Game, GameStatus, KeyStates};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Colour a letter by its state
fn paint(letter: char, state: MatchState) -> ColoredString {
    let text = letter.to_uppercase().to_string();
    match state {
        MatchState::Matched => text.black().on_green().bold(),
        MatchState::Exists => text.black().on_yellow().bold(),
        MatchState::NotMatched => text.bright_black(),
        MatchState::NotChecked => text.normal(),
    }
}

/// Print an evaluated row as coloured letters followed by its emoji pattern
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_row<W: Write>(out: &mut W, row: &[Cell]) -> io::Result<()> {
    let letters: Vec<String> = row
        .iter()
        .map(|cell| format!(" {} ", paint(cell.display_char(), cell.state())))
        .collect();
    writeln!(out, "  {}  {}", letters.concat(), row_to_emoji(row))
}

/// Print the keyboard, each key coloured by its best-known state
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_keyboard<W: Write>(out: &mut W, keys: &KeyStates) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let letters: Vec<String> = row
            .chars()
            .map(|c| paint(c, keys.get(c)).to_string())
            .collect();
        writeln!(out, "  {}{}", " ".repeat(indent), letters.join(" "))?;
    }
    Ok(())
}

/// Print the final message of a finished game
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "\n{}",
            format!(
                "You won! {}/{} attempts",
                game.attempts(),
                game.max_attempts()
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => writeln!(
            out,
            "\n{}",
            format!(
                "Better luck next time! The answer was: {}",
                game.answer()
            )
            .yellow()
            .bold()
        ),
        GameStatus::Playing => Ok(()),
    }
}
