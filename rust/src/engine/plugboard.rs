//! Plugboard (Steckerbrett): a partial, self-inverse letter swap applied before
//! and after the rotor stack. Unplugged letters pass straight through.

use thiserror::Error;

use super::alphabet::{AlphabetError, Letter, NUM_LETTERS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlugboardError {
    #[error("cannot plug {0} to itself")]
    InvalidPlugboardPair(char),
    #[error("{0} is already plugged")]
    DuplicateMapping(char),
    #[error("no plugboard mapping for letter {0}")]
    NotMapped(char),
    #[error("invalid plugboard letter: {0}")]
    InvalidLetter(#[from] AlphabetError),
}

/// Cable state of the plugboard. `mapping[i]` holds the partner of letter `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [Option<Letter>; NUM_LETTERS as usize],
}

impl Plugboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugs a cable between `a` and `b`.
    pub fn add_pair(&mut self, a: char, b: char) -> Result<(), PlugboardError> {
        let first = Letter::from_char(a)?;
        let second = Letter::from_char(b)?;
        if first == second {
            return Err(PlugboardError::InvalidPlugboardPair(first.to_char()));
        }
        for letter in [first, second] {
            if self.has_letter(letter) {
                return Err(PlugboardError::DuplicateMapping(letter.to_char()));
            }
        }

        self.mapping[usize::from(first.index())] = Some(second);
        self.mapping[usize::from(second.index())] = Some(first);
        Ok(())
    }

    /// Pulls the cable attached to `letter`, freeing both ends.
    pub fn remove_pair(&mut self, letter: char) -> Result<(), PlugboardError> {
        let letter = Letter::from_char(letter)?;
        let partner = self.mapping[usize::from(letter.index())]
            .ok_or(PlugboardError::NotMapped(letter.to_char()))?;

        self.mapping[usize::from(letter.index())] = None;
        self.mapping[usize::from(partner.index())] = None;
        Ok(())
    }

    pub fn swap(&self, letter: Letter) -> Letter {
        self.mapping[usize::from(letter.index())].unwrap_or(letter)
    }

    pub fn has_letter(&self, letter: Letter) -> bool {
        self.mapping[usize::from(letter.index())].is_some()
    }

    /// Removes every cable.
    pub fn reset(&mut self) {
        self.mapping = [None; NUM_LETTERS as usize];
    }

    /// Plugged pairs, each reported once with the lower letter first.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|letter| {
                self.mapping[usize::from(letter.index())]
                    .filter(|partner| letter < *partner)
                    .map(|partner| (letter, partner))
            })
            .collect()
    }

    /// Number of cables currently plugged.
    pub fn len(&self) -> usize {
        self.mapping.iter().flatten().count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::{Plugboard, PlugboardError};
    use crate::engine::alphabet::{AlphabetError, Letter};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).expect("test letters are valid")
    }

    #[test]
    fn swaps_both_directions() {
        let mut plugboard = Plugboard::new();
        plugboard.add_pair('A', 'b').expect("pair should plug");
        assert_eq!(plugboard.swap(letter('A')), letter('B'));
        assert_eq!(plugboard.swap(letter('B')), letter('A'));
        assert_eq!(plugboard.swap(letter('C')), letter('C'));
        assert_eq!(plugboard.len(), 1);
    }

    #[test]
    fn rejects_self_pairs() {
        let mut plugboard = Plugboard::new();
        let err = plugboard.add_pair('A', 'A').unwrap_err();
        assert_eq!(err, PlugboardError::InvalidPlugboardPair('A'));
        assert!(plugboard.is_empty());
    }

    #[test]
    fn rejects_letters_already_plugged() {
        let mut plugboard = Plugboard::new();
        plugboard.add_pair('A', 'B').expect("first pair should plug");
        assert_eq!(
            plugboard.add_pair('A', 'C').unwrap_err(),
            PlugboardError::DuplicateMapping('A')
        );
        assert_eq!(
            plugboard.add_pair('C', 'B').unwrap_err(),
            PlugboardError::DuplicateMapping('B')
        );
        // A failed add leaves no half-plugged cable behind.
        assert!(!plugboard.has_letter(letter('C')));
    }

    #[test]
    fn removes_pairs_from_either_end() {
        let mut plugboard = Plugboard::new();
        plugboard.add_pair('Q', 'W').expect("pair should plug");
        plugboard.remove_pair('W').expect("pair should unplug");
        assert!(plugboard.is_empty());
        assert_eq!(plugboard.swap(letter('Q')), letter('Q'));
    }

    #[test]
    fn remove_unplugged_letter_fails() {
        let mut plugboard = Plugboard::new();
        assert_eq!(
            plugboard.remove_pair('Z').unwrap_err(),
            PlugboardError::NotMapped('Z')
        );
    }

    #[test]
    fn reset_allows_replugging() {
        let mut plugboard = Plugboard::new();
        plugboard.add_pair('A', 'B').expect("pair should plug");
        plugboard.add_pair('C', 'D').expect("pair should plug");
        plugboard.reset();
        plugboard.add_pair('A', 'B').expect("pair should plug again after reset");
        assert_eq!(plugboard.pairs(), vec![(letter('A'), letter('B'))]);
    }

    #[test]
    fn rejects_non_letters() {
        let mut plugboard = Plugboard::new();
        assert_eq!(
            plugboard.add_pair('A', '!').unwrap_err(),
            PlugboardError::InvalidLetter(AlphabetError::NotALetter('!'))
        );
    }

    #[test]
    fn accepts_all_thirteen_cables() {
        let mut plugboard = Plugboard::new();
        let letters: Vec<char> = ('A'..='Z').collect();
        for pair in letters.chunks(2) {
            plugboard.add_pair(pair[0], pair[1]).expect("disjoint pairs plug");
        }
        assert_eq!(plugboard.len(), 13);
        assert_eq!(plugboard.swap(letter('Y')), letter('Z'));
    }
}
