//! Keyboard read-model
//!
//! Tracks the most informative state seen for each letter across every
//! evaluated guess. States only move up the `MatchState` ordering.

use crate::core::{MatchState, alphabet};

/// Best-known `MatchState` per alphabet letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStates {
    states: [MatchState; alphabet::LEN],
}

impl Default for KeyStates {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStates {
    /// All letters start as `NotChecked`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: [MatchState::NotChecked; alphabet::LEN],
        }
    }

    /// State of a letter; characters outside the alphabet read as `NotChecked`
    #[must_use]
    pub fn get(&self, letter: char) -> MatchState {
        alphabet::index_of(letter).map_or(MatchState::NotChecked, |i| self.states[i])
    }

    /// Merge a newly observed state, keeping the higher of the two
    ///
    /// Returns `true` if the stored state changed.
    pub(crate) fn upgrade(&mut self, letter: char, state: MatchState) -> bool {
        let Some(slot) = alphabet::index_of(letter).map(|i| &mut self.states[i]) else {
            return false;
        };
        if state > *slot {
            *slot = state;
            true
        } else {
            false
        }
    }

    pub(crate) fn reset(&mut self) {
        self.states = [MatchState::NotChecked; alphabet::LEN];
    }

    /// Every letter with its state, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, MatchState)> + '_ {
        alphabet::letters().zip(self.states.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchState::{Exists, Matched, NotChecked, NotMatched};
    use proptest::prelude::*;

    #[test]
    fn starts_unchecked() {
        let keys = KeyStates::new();
        assert!(keys.iter().all(|(_, state)| state == NotChecked));
        assert_eq!(keys.iter().count(), alphabet::LEN);
    }

    #[test]
    fn upgrade_raises_state() {
        let mut keys = KeyStates::new();
        assert!(keys.upgrade('e', NotMatched));
        assert_eq!(keys.get('e'), NotMatched);
        assert!(keys.upgrade('e', Exists));
        assert!(keys.upgrade('e', Matched));
        assert_eq!(keys.get('e'), Matched);
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut keys = KeyStates::new();
        keys.upgrade('x', Matched);
        assert!(!keys.upgrade('x', NotMatched));
        assert!(!keys.upgrade('x', Exists));
        assert_eq!(keys.get('x'), Matched);

        keys.upgrade('y', Exists);
        assert!(!keys.upgrade('y', NotMatched));
        assert_eq!(keys.get('y'), Exists);
    }

    #[test]
    fn letters_outside_alphabet_ignored() {
        let mut keys = KeyStates::new();
        assert!(!keys.upgrade('1', Matched));
        assert_eq!(keys.get('1'), NotChecked);
        assert_eq!(keys, KeyStates::new());
    }

    #[test]
    fn upper_case_reads_same_slot() {
        let mut keys = KeyStates::new();
        keys.upgrade('m', Exists);
        assert_eq!(keys.get('M'), Exists);
    }

    #[test]
    fn reset_clears_everything() {
        let mut keys = KeyStates::new();
        keys.upgrade('a', Matched);
        keys.upgrade('b', Exists);
        keys.reset();
        assert_eq!(keys, KeyStates::new());
    }

    fn any_state() -> impl Strategy<Value = MatchState> {
        prop_oneof![
            Just(NotChecked),
            Just(NotMatched),
            Just(Exists),
            Just(Matched),
        ]
    }

    proptest! {
        #[test]
        fn state_is_running_maximum(updates in proptest::collection::vec(any_state(), 0..20)) {
            let mut keys = KeyStates::new();
            let mut highest = NotChecked;
            for state in updates {
                let before = keys.get('q');
                keys.upgrade('q', state);
                highest = highest.max(state);
                prop_assert!(keys.get('q') >= before);
                prop_assert_eq!(keys.get('q'), highest);
            }
        }
    }
}
