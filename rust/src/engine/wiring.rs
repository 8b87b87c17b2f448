//! Validated wiring tables. A wiring is a permutation of the 26 contacts; the
//! reflector additionally requires the permutation to be its own inverse with
//! no contact wired to itself.

use thiserror::Error;

use super::alphabet::{AlphabetError, Letter, NUM_LETTERS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("wiring must have 26 contacts, got {0}")]
    WrongLength(usize),
    #[error("wiring contains an invalid contact: {0}")]
    InvalidContact(#[from] AlphabetError),
    #[error("contact {0} is wired more than once")]
    RepeatedContact(char),
    #[error("reflector wiring is not reciprocal at {0}")]
    NotReciprocal(char),
    #[error("reflector wires {0} to itself")]
    SelfReflecting(char),
}

/// A permutation of the alphabet, indexed by input contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    contacts: [Letter; NUM_LETTERS as usize],
}

impl Wiring {
    /// Parses a 26-letter wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    pub fn parse(wiring: &str) -> Result<Self, WiringError> {
        let count = wiring.chars().count();
        if count != usize::from(NUM_LETTERS) {
            return Err(WiringError::WrongLength(count));
        }

        let mut contacts = [Letter::A; NUM_LETTERS as usize];
        let mut seen = [false; NUM_LETTERS as usize];
        for (slot, ch) in contacts.iter_mut().zip(wiring.chars()) {
            let letter = Letter::from_char(ch)?;
            let idx = usize::from(letter.index());
            if seen[idx] {
                return Err(WiringError::RepeatedContact(letter.to_char()));
            }
            seen[idx] = true;
            *slot = letter;
        }
        Ok(Self { contacts })
    }

    /// Parses a wiring and checks that it can act as a reflector.
    pub fn parse_reflecting(wiring: &str) -> Result<Self, WiringError> {
        let parsed = Self::parse(wiring)?;
        for letter in Letter::all() {
            let partner = parsed.map(letter);
            if partner == letter {
                return Err(WiringError::SelfReflecting(letter.to_char()));
            }
            if parsed.map(partner) != letter {
                return Err(WiringError::NotReciprocal(letter.to_char()));
            }
        }
        Ok(parsed)
    }

    pub fn map(&self, letter: Letter) -> Letter {
        self.contacts[usize::from(letter.index())]
    }

    /// The inverse permutation, used for the return path through a rotor.
    pub fn inverse(&self) -> Self {
        let mut contacts = [Letter::A; NUM_LETTERS as usize];
        for (input, output) in Letter::all().zip(self.contacts.iter()) {
            contacts[usize::from(output.index())] = input;
        }
        Self { contacts }
    }

    pub fn as_string(&self) -> String {
        self.contacts.iter().map(|l| l.to_char()).collect()
    }
}
