//! Guess evaluation
//!
//! Classifies every letter of a guess against the answer, distributing credit
//! among repeated letters through a depletable pool of answer letters.

use super::{Answer, MatchState};

/// Evaluate `guess` against `answer`
///
/// Returns one `MatchState` per guess position; never `NotChecked`.
///
/// # Algorithm
/// 1. Build a pool holding the count of each letter in the answer
/// 2. First pass: mark exact position matches and remove them from the pool
/// 3. Second pass: in order, mark remaining letters `Exists` while the pool
///    still holds that letter, otherwise `NotMatched`
///
/// # Panics
/// Panics if `guess` and `answer` differ in length. The board guarantees
/// equal lengths, so a mismatch is a caller bug.
///
/// # Examples
/// ```
/// use lexis::core::{Answer, MatchState, evaluate};
///
/// let answer = Answer::new("floor").unwrap();
/// let guess: Vec<char> = "robot".chars().collect();
///
/// // The second 'o' is in place, so only one 'o' is left for the first
/// assert_eq!(
///     evaluate(&guess, &answer),
///     [
///         MatchState::Exists,
///         MatchState::Exists,
///         MatchState::NotMatched,
///         MatchState::Matched,
///         MatchState::NotMatched,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], answer: &Answer) -> Vec<MatchState> {
    assert_eq!(
        guess.len(),
        answer.len(),
        "guess and answer must have the same length"
    );

    let mut result = vec![MatchState::NotMatched; guess.len()];
    let mut answer_available = answer.char_counts();

    // First pass: exact position matches
    for (i, (&letter, &target)) in guess.iter().zip(answer.chars()).enumerate() {
        if letter == target {
            result[i] = MatchState::Matched;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present elsewhere, earlier positions claim first
    for (state, &letter) in result.iter_mut().zip(guess) {
        if *state == MatchState::Matched {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            *state = MatchState::Exists;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchState::{Exists, Matched, NotMatched};
    use proptest::prelude::*;

    fn eval(guess: &str, answer: &str) -> Vec<MatchState> {
        let guess: Vec<char> = guess.chars().collect();
        evaluate(&guess, &Answer::new(answer).unwrap())
    }

    #[test]
    fn evaluate_exact_match() {
        assert_eq!(eval("minty", "minty"), vec![Matched; 5]);
    }

    #[test]
    fn evaluate_no_common_letters() {
        assert_eq!(eval("abcde", "fghij"), vec![NotMatched; 5]);
    }

    #[test]
    fn evaluate_repeated_guess_letter_single_answer_letter() {
        // lexis has one 'e' and one 'x'. The 'x' at index 2 and the 's' are
        // exact; the first 'e' takes the only 'e' left in the pool.
        assert_eq!(
            eval("exxes", "lexis"),
            vec![Exists, NotMatched, Matched, NotMatched, Matched]
        );
    }

    #[test]
    fn evaluate_exact_match_wins_over_earlier_position() {
        // The 'o' at index 3 is exact, so the earlier 'o' only gets the
        // second 'o' of floor.
        assert_eq!(
            eval("robot", "floor"),
            vec![Exists, Exists, NotMatched, Matched, NotMatched]
        );
        // The exact 'e' uses up the only 'e', so the later one gets nothing.
        assert_eq!(
            eval("level", "hello"),
            vec![Exists, Matched, NotMatched, NotMatched, Exists]
        );
        assert_eq!(
            eval("hollo", "hello"),
            vec![Matched, NotMatched, Matched, Matched, Matched]
        );
    }

    #[test]
    fn evaluate_repeated_answer_letters() {
        assert_eq!(
            eval("speed", "erase"),
            vec![Exists, NotMatched, Exists, Exists, NotMatched]
        );
    }

    #[test]
    fn evaluate_real_example() {
        assert_eq!(
            eval("crane", "slate"),
            vec![NotMatched, NotMatched, Matched, NotMatched, Matched]
        );
    }

    #[test]
    fn evaluate_other_lengths() {
        assert_eq!(eval("ab", "ba"), vec![Exists, Exists]);
        assert_eq!(eval("aaa", "aba"), vec![Matched, NotMatched, Matched]);
    }

    #[test]
    fn evaluate_long_repeated_letters() {
        let answer = "a".repeat(256);
        let mut guess = "a".repeat(255);
        guess.insert(0, 'b');
        let states = eval(&guess, &answer);
        assert_eq!(states[0], NotMatched);
        assert!(states[1..].iter().all(|&s| s == Matched));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn evaluate_length_mismatch_panics() {
        let _ = eval("mint", "minty");
    }

    #[test]
    fn evaluate_does_not_touch_inputs() {
        let guess: Vec<char> = "exxes".chars().collect();
        let answer = Answer::new("lexis").unwrap();
        let first = evaluate(&guess, &answer);
        let second = evaluate(&guess, &answer);
        assert_eq!(first, second);
        assert_eq!(guess.iter().collect::<String>(), "exxes");
        assert_eq!(answer.to_string(), "lexis");
    }

    fn word(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('a', 'd'), len)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    fn word_pair() -> impl Strategy<Value = (String, String)> {
        (1usize..8).prop_flat_map(|len| (word(len), word(len)))
    }

    proptest! {
        #[test]
        fn credit_per_letter_never_exceeds_answer_count((guess, answer) in word_pair()) {
            let states = eval(&guess, &answer);

            for letter in 'a'..='d' {
                let in_guess = guess.chars().filter(|&c| c == letter).count();
                let in_answer = answer.chars().filter(|&c| c == letter).count();
                let credited = guess
                    .chars()
                    .zip(&states)
                    .filter(|&(c, s)| c == letter && matches!(s, Matched | Exists))
                    .count();
                prop_assert_eq!(credited, in_guess.min(in_answer));
            }
        }

        #[test]
        fn matched_exactly_where_letters_agree((guess, answer) in word_pair()) {
            let states = eval(&guess, &answer);

            for ((g, a), state) in guess.chars().zip(answer.chars()).zip(states) {
                prop_assert_eq!(g == a, state == Matched);
            }
        }
    }
}
