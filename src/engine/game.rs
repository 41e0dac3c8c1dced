//! Game state machine
//!
//! `Game` owns the board, the answer and the keyboard read-model, and is the
//! only thing allowed to mutate them. Every operation is total: calls that do
//! not apply in the current state are ignored rather than reported.

use super::{Board, KeyStates};
use crate::core::{Answer, AnswerError, Cell, MatchState, alphabet, evaluate};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Progress of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the game has reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a call to [`Game::submit_row`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Row incomplete or game already over; nothing changed
    Ignored,
    /// Guess evaluated, cursor moved to the next row
    Continue,
    /// Guess equals the answer
    Won,
    /// Wrong guess on the last row
    Lost,
}

/// Errors for host calls that break the engine's preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },
    #[error("answer has {actual} letters but rows have {expected}")]
    AnswerLength { expected: usize, actual: usize },
    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
    #[error("'{0}' is not a letter a-z")]
    InvalidCharacter(char),
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    answer: Answer,
    keys: KeyStates,
    status: GameStatus,
    attempts: usize,
}

impl Game {
    /// Start a game on a `rows × cols` board
    ///
    /// # Errors
    /// Returns `GameError` if a dimension is zero, the answer is not made of
    /// letters, or its length differs from `cols`.
    ///
    /// # Examples
    /// ```
    /// use lexis::engine::{Game, GameStatus, SubmitOutcome};
    ///
    /// let mut game = Game::new(6, 5, "minty").unwrap();
    /// for c in "minty".chars() {
    ///     game.insert_character(c).unwrap();
    /// }
    /// assert_eq!(game.submit_row(), SubmitOutcome::Won);
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(rows: usize, cols: usize, answer: &str) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard { rows, cols });
        }
        let answer = Self::checked_answer(cols, answer)?;

        info!(rows, cols, "new game");
        Ok(Self {
            board: Board::new(rows, cols),
            answer,
            keys: KeyStates::new(),
            status: GameStatus::Playing,
            attempts: 0,
        })
    }

    fn checked_answer(cols: usize, text: &str) -> Result<Answer, GameError> {
        let answer = Answer::new(text)?;
        if answer.len() != cols {
            return Err(GameError::AnswerLength {
                expected: cols,
                actual: answer.len(),
            });
        }
        Ok(answer)
    }

    /// Type a letter into the active row
    ///
    /// Ignored once the game is over or the row is full.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` for anything outside a-z; the
    /// board is left untouched.
    pub fn insert_character(&mut self, c: char) -> Result<(), GameError> {
        if !alphabet::contains(c) {
            return Err(GameError::InvalidCharacter(c));
        }
        if self.status == GameStatus::Playing {
            self.board.insert_character(alphabet::normalize(c));
        }
        Ok(())
    }

    /// Remove the last typed letter of the active row
    pub fn delete_character(&mut self) {
        if self.status == GameStatus::Playing {
            self.board.delete_character();
        }
    }

    /// Evaluate the active row against the answer
    ///
    /// The same per-cell result is written to the board and merged into the
    /// keyboard, so the two never disagree about a guess.
    #[instrument(skip(self), fields(row = self.board.cursor().0))]
    pub fn submit_row(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Playing {
            return SubmitOutcome::Ignored;
        }
        let Some(guess) = self.board.active_letters() else {
            debug!("row incomplete, submit ignored");
            return SubmitOutcome::Ignored;
        };

        let (row, _) = self.board.cursor();
        let states = evaluate(&guess, &self.answer);
        for (col, (&letter, &state)) in guess.iter().zip(&states).enumerate() {
            self.board.set_cell_state(row, col, state);
            let previous = self.keys.get(letter);
            if self.keys.upgrade(letter, state) {
                debug!(%letter, from = %previous, to = %state, "keyboard update");
            }
        }
        self.attempts += 1;

        if guess == self.answer.chars() {
            info!(attempts = self.attempts, "answer found");
            self.status = GameStatus::Won;
            SubmitOutcome::Won
        } else if self.board.advance_row() {
            SubmitOutcome::Continue
        } else {
            info!(answer = %self.answer, "no more rows");
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost
        }
    }

    /// Start over on a fresh board, optionally with a new answer
    ///
    /// # Errors
    /// Returns `GameError` if `answer` is invalid for this board; the current
    /// game is then left as it was.
    pub fn restart(&mut self, answer: Option<&str>) -> Result<(), GameError> {
        let rows = self.board.row_count();
        let cols = self.board.col_count();
        if let Some(text) = answer {
            self.answer = Self::checked_answer(cols, text)?;
        }

        self.board = Board::new(rows, cols);
        self.keys.reset();
        self.status = GameStatus::Playing;
        self.attempts = 0;
        info!("game restarted");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of every row for hosts that render asynchronously
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.board.rows().to_vec()
    }

    #[inline]
    #[must_use]
    pub fn key_state(&self, letter: char) -> MatchState {
        self.keys.get(letter)
    }

    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &KeyStates {
        &self.keys
    }

    /// Active (row, column)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        self.board.cursor()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_row_complete(&self) -> bool {
        self.board.is_row_complete()
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Number of guesses evaluated so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.board.row_count()
    }

    /// Text of the active row, blanks shown as spaces
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.board.active_row().iter().map(|c| c.display_char()).collect()
    }
}
