//! Formatting utilities for terminal output

use crate::core::{Cell, MatchState};

/// QWERTY layout used to draw the keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Symbol for a single state
#[must_use]
pub const fn state_emoji(state: MatchState) -> char {
    match state {
        MatchState::Matched => '🟩',
        MatchState::Exists => '🟨',
        MatchState::NotMatched => '⬛',
        MatchState::NotChecked => '⬜',
    }
}

/// Format an evaluated row as an emoji string
#[must_use]
pub fn row_to_emoji(row: &[Cell]) -> String {
    row.iter().map(|cell| state_emoji(cell.state())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, crate::core::alphabet::letters().collect::<Vec<_>>());
    }

    #[test]
    fn unchecked_row_is_blank() {
        let game = Game::new(1, 5, "minty").unwrap();
        assert_eq!(row_to_emoji(game.board().active_row()), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn evaluated_row_emoji() {
        let mut game = Game::new(2, 5, "lexis").unwrap();
        for c in "exxes".chars() {
            game.insert_character(c).unwrap();
        }
        game.submit_row();
        assert_eq!(row_to_emoji(&game.board().rows()[0]), "🟨⬛🟩⬛🟩");
    }
}
