//! Game configuration
//!
//! Validated settings shared by the TUI and the line mode: board height and
//! the list of answers to draw from.

use crate::core::{Answer, AnswerError};
use crate::engine::{Game, GameError};
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Default number of guesses per game
pub const DEFAULT_ROWS: usize = 6;

/// Answer used when none is supplied
pub const DEFAULT_ANSWER: &str = "minty";

/// Errors for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one row is required")]
    NoRows,
    #[error("invalid answer '{word}': {source}")]
    InvalidAnswer { word: String, source: AnswerError },
    #[error("answer '{word}' has {actual} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Validated game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    answers: Vec<String>,
    cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            answers: vec![DEFAULT_ANSWER.to_string()],
            cols: DEFAULT_ANSWER.len(),
        }
    }
}

impl GameConfig {
    /// Validate settings
    ///
    /// An empty answer list falls back to [`DEFAULT_ANSWER`]. Every answer must
    /// be a valid word and all answers must share the first one's length,
    /// which becomes the board width.
    ///
    /// # Errors
    /// Returns `ConfigError` describing the first invalid value.
    pub fn new(rows: usize, answers: Vec<String>) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if answers.is_empty() {
            return Ok(Self {
                rows,
                ..Self::default()
            });
        }

        let mut normalized = Vec::with_capacity(answers.len());
        for word in answers {
            let answer = Answer::new(&word).map_err(|source| ConfigError::InvalidAnswer {
                word: word.clone(),
                source,
            })?;
            normalized.push(answer.to_string());
        }

        let cols = normalized[0].len();
        if let Some(word) = normalized.iter().find(|w| w.len() != cols) {
            return Err(ConfigError::MixedLengths {
                word: word.clone(),
                expected: cols,
                actual: word.len(),
            });
        }

        Ok(Self {
            rows,
            answers: normalized,
            cols,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Board width, the length of every answer
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Pick one of the configured answers at random
    #[must_use]
    pub fn pick_answer(&self) -> &str {
        self.answers
            .choose(&mut rand::rng())
            .map_or(DEFAULT_ANSWER, String::as_str)
    }

    /// Start a game with a randomly picked answer
    ///
    /// # Errors
    /// Only fails if the configuration was built inconsistently.
    pub fn new_game(&self) -> Result<Game, GameError> {
        Game::new(self.rows, self.cols, self.pick_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows(), 6);
        assert_eq!(config.cols(), 5);
        assert_eq!(config.answers(), &["minty".to_string()]);
    }

    #[test]
    fn empty_answers_fall_back_to_default() {
        let config = GameConfig::new(4, Vec::new()).unwrap();
        assert_eq!(config.rows(), 4);
        assert_eq!(config.pick_answer(), DEFAULT_ANSWER);
    }

    #[test]
    fn answers_are_normalized() {
        let config = GameConfig::new(6, vec!["LEXIS".to_string()]).unwrap();
        assert_eq!(config.answers(), &["lexis".to_string()]);
    }

    #[test]
    fn zero_rows_rejected() {
        assert_eq!(
            GameConfig::new(0, vec!["minty".to_string()]),
            Err(ConfigError::NoRows)
        );
    }

    #[test]
    fn invalid_answer_rejected() {
        assert!(matches!(
            GameConfig::new(6, vec!["mi ty".to_string()]),
            Err(ConfigError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let err = GameConfig::new(6, vec!["minty".to_string(), "axe".to_string()]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MixedLengths {
                word: "axe".to_string(),
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn pick_answer_from_list() {
        let answers = vec!["crane".to_string(), "slate".to_string()];
        let config = GameConfig::new(6, answers.clone()).unwrap();
        for _ in 0..10 {
            assert!(answers.iter().any(|a| a == config.pick_answer()));
        }
    }

    #[test]
    fn new_game_uses_config() {
        let config = GameConfig::new(3, vec!["axe".to_string()]).unwrap();
        let game = config.new_game().unwrap();
        assert_eq!(game.max_attempts(), 3);
        assert_eq!(game.board().col_count(), 3);
        assert_eq!(game.answer().to_string(), "axe");
    }
}
