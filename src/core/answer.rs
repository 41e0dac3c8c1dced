//! Hidden answer representation
//!
//! An `Answer` stores the target word as a sequence of alphabet letters and
//! provides the per-letter counts the evaluator depletes.

use super::alphabet;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The hidden word a game is played against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    chars: Vec<char>,
}

/// Error type for invalid answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("answer must not be empty")]
    Empty,
    #[error("answer contains '{0}', which is not a letter a-z")]
    InvalidCharacter(char),
}

impl Answer {
    /// Create a new answer from a string
    ///
    /// ASCII upper-case letters are folded to lower-case.
    ///
    /// # Errors
    /// Returns `AnswerError` if the text is empty or contains a character
    /// outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use lexis::core::Answer;
    ///
    /// let answer = Answer::new("Minty").unwrap();
    /// assert_eq!(answer.to_string(), "minty");
    ///
    /// assert!(Answer::new("").is_err());
    /// assert!(Answer::new("m1nty").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, AnswerError> {
        let chars = text
            .chars()
            .map(|c| {
                if alphabet::contains(c) {
                    Ok(alphabet::normalize(c))
                } else {
                    Err(AnswerError::InvalidCharacter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if chars.is_empty() {
            return Err(AnswerError::Empty);
        }

        Ok(Self { chars })
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters in the answer
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an answer holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Count of each letter in the answer
    ///
    /// Used as the depletable pool during evaluation.
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_creation_valid() {
        let answer = Answer::new("minty").unwrap();
        assert_eq!(answer.chars(), &['m', 'i', 'n', 't', 'y']);
        assert_eq!(answer.len(), 5);
        assert_eq!(answer.to_string(), "minty");
    }

    #[test]
    fn answer_creation_uppercase_normalized() {
        assert_eq!(Answer::new("MINTY").unwrap(), Answer::new("minty").unwrap());
        assert_eq!(Answer::new("LeXiS").unwrap().to_string(), "lexis");
    }

    #[test]
    fn answer_creation_empty() {
        assert_eq!(Answer::new(""), Err(AnswerError::Empty));
    }

    #[test]
    fn answer_creation_invalid_characters() {
        assert_eq!(
            Answer::new("min7y"),
            Err(AnswerError::InvalidCharacter('7'))
        );
        assert!(Answer::new("min y").is_err());
        assert!(Answer::new("mint!").is_err());
    }

    #[test]
    fn answer_other_lengths_allowed() {
        assert_eq!(Answer::new("abc").unwrap().len(), 3);
        assert_eq!(Answer::new("abcdefg").unwrap().len(), 7);
    }

    #[test]
    fn answer_char_counts() {
        let answer = Answer::new("lexis").unwrap();
        let counts = answer.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));

        let answer = Answer::new("speed").unwrap();
        let counts = answer.char_counts();
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn answer_char_counts_long_repeated_letter() {
        let answer = Answer::new(&"a".repeat(300)).unwrap();
        assert_eq!(answer.char_counts().get(&'a'), Some(&300));
    }
}
