//! Letter slots and their match classification

use std::fmt;

/// Classification of a guessed letter relative to the answer
///
/// Variants are declared in increasing order of information, so the derived
/// `Ord` is the ordering used when aggregating keyboard state:
/// `NotChecked < NotMatched < Exists < Matched`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchState {
    /// Not evaluated yet
    #[default]
    NotChecked,
    /// Letter does not occur in the answer (or all its occurrences are claimed)
    NotMatched,
    /// Letter occurs in the answer at another position
    Exists,
    /// Letter is in the correct position
    Matched,
}

impl MatchState {
    /// Whether an evaluation has assigned this state
    #[inline]
    #[must_use]
    pub const fn is_checked(self) -> bool {
        !matches!(self, Self::NotChecked)
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotChecked => "not_checked",
            Self::NotMatched => "not_matched",
            Self::Exists => "exists",
            Self::Matched => "matched",
        };
        f.write_str(name)
    }
}

/// A single letter slot on the board
///
/// Cells can only be created and mutated by the board; hosts read them through
/// [`Cell::character`] and [`Cell::state`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    character: Option<char>,
    state: MatchState,
}

impl Cell {
    /// The letter in this slot, if any
    #[inline]
    #[must_use]
    pub const fn character(self) -> Option<char> {
        self.character
    }

    /// The letter in this slot, or a space when empty
    #[inline]
    #[must_use]
    pub fn display_char(self) -> char {
        self.character.unwrap_or(' ')
    }

    #[inline]
    #[must_use]
    pub const fn state(self) -> MatchState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.character.is_none()
    }

    pub(crate) const fn set_character(&mut self, c: char) {
        self.character = Some(c);
    }

    pub(crate) const fn clear_character(&mut self) {
        self.character = None;
    }

    pub(crate) const fn set_state(&mut self, state: MatchState) {
        self.state = state;
    }
}
