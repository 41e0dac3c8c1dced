//! Letter grid with a text-entry cursor
//!
//! The board is a fixed `rows × cols` matrix of cells. Letters are typed into
//! the active row at the cursor; earlier rows hold submitted guesses and later
//! rows stay blank until the cursor reaches them.

use crate::core::{Cell, MatchState};

/// Grid of guesses plus the (row, column) cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Board {
    /// Create an empty board with the cursor at the origin
    ///
    /// # Panics
    /// Panics if either dimension is zero; `Game` validates them first.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows: vec![vec![Cell::default(); cols]; rows],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Active (row, column)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at a position, or `None` when out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The row currently being typed into
    #[inline]
    #[must_use]
    pub fn active_row(&self) -> &[Cell] {
        &self.rows[self.cursor_row]
    }

    /// Letters of the active row, or `None` while any slot is still empty
    #[must_use]
    pub fn active_letters(&self) -> Option<Vec<char>> {
        self.active_row().iter().map(|cell| cell.character()).collect()
    }

    /// Whether the active row can be submitted
    ///
    /// Letters are only ever entered left to right and removed right to left,
    /// so a filled last slot means the whole row is filled.
    #[must_use]
    pub fn is_row_complete(&self) -> bool {
        self.active_row().last().is_some_and(|cell| !cell.is_empty())
    }

    /// Write a letter at the cursor and step right unless on the last column
    ///
    /// Does nothing once the active row is complete.
    pub(crate) fn insert_character(&mut self, c: char) {
        if self.cursor_row >= self.rows.len() || self.is_row_complete() {
            return;
        }

        let last_col = self.col_count() - 1;
        self.rows[self.cursor_row][self.cursor_col].set_character(c);
        if self.cursor_col < last_col {
            self.cursor_col += 1;
        }
    }

    /// Clear the last letter typed into the active row
    ///
    /// When the cursor sits on an empty slot it first steps back one column,
    /// so backspace always removes the letter just before the first gap.
    pub(crate) fn delete_character(&mut self) {
        if self.cursor_col > 0 && self.rows[self.cursor_row][self.cursor_col].is_empty() {
            self.cursor_col -= 1;
        }
        self.rows[self.cursor_row][self.cursor_col].clear_character();
    }

    /// Move the cursor to the start of the next row
    ///
    /// Returns `false` when the active row is already the last one.
    pub(crate) fn advance_row(&mut self) -> bool {
        if self.cursor_row + 1 < self.rows.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
            true
        } else {
            false
        }
    }

    /// Record the evaluation result for one cell; out of bounds is ignored
    pub(crate) fn set_cell_state(&mut self, row: usize, col: usize, state: MatchState) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.set_state(state);
        }
    }
}
