//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess.

use crate::config::GameConfig;
use crate::core::alphabet;
use crate::engine::{Game, SubmitOutcome};
use crate::output::{print_keyboard, print_outcome, print_row};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(config, stdin.lock(), stdout.lock())
}

/// Play games reading guesses from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_lines<R: BufRead, W: Write>(config: &GameConfig, input: R, mut out: W) -> Result<()> {
    let mut game = config.new_game()?;
    let mut lines = input.lines();

    writeln!(out, "lexis - guess the {}-letter word", config.cols())?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game\n")?;

    loop {
        if game.status().is_finished() {
            print_outcome(&mut out, &game)?;
            let Some(reply) = prompt(&mut out, &mut lines, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(reply.to_lowercase().as_str(), "yes" | "y") {
                game.restart(Some(config.pick_answer()))?;
                writeln!(out, "\nNew game started!\n")?;
                continue;
            }
            writeln!(out, "\nThanks for playing!")?;
            return Ok(());
        }

        let label = format!("Guess {}/{}", game.attempts() + 1, game.max_attempts());
        let Some(line) = prompt(&mut out, &mut lines, &label)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
            "new" => {
                game.restart(Some(config.pick_answer()))?;
                writeln!(out, "\nNew game started!\n")?;
            }
            word => submit_word(&mut game, word, &mut out)?,
        }
    }
}

fn submit_word<W: Write>(game: &mut Game, word: &str, out: &mut W) -> Result<()> {
    let cols = game.board().col_count();
    if word.chars().count() != cols {
        writeln!(out, "Guess must be exactly {cols} letters\n")?;
        return Ok(());
    }
    if let Some(bad) = word.chars().find(|&c| !alphabet::contains(c)) {
        writeln!(out, "'{bad}' is not a letter a-z\n")?;
        return Ok(());
    }

    for c in word.chars() {
        game.insert_character(c)?;
    }
    let row = game.cursor().0;
    let outcome = game.submit_row();
    debug!(?outcome, guess = word, "line submitted");

    if outcome != SubmitOutcome::Ignored {
        print_row(out, &game.board().rows()[row])?;
        writeln!(out)?;
        print_keyboard(out, game.keys())?;
        writeln!(out)?;
    }
    if outcome == SubmitOutcome::Won {
        info!(attempts = game.attempts(), "line mode win");
    }
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<W: Write, I: Iterator<Item = io::Result<String>>>(
    out: &mut W,
    lines: &mut I,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
