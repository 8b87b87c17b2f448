//! Letter codec for the 26-contact entry disc. Every other engine component
//! works on `Letter` values so the substitution arithmetic never has to deal
//! with characters outside A-Z.

use std::fmt;

use thiserror::Error;

/// Number of contacts on every wheel.
pub const NUM_LETTERS: u8 = 26;

/// Contact order of the entry disc (straight-through on the Enigma I).
pub const ENTRY_DISC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("'{0}' is not a letter A-Z")]
    NotALetter(char),
    #[error("index {0} is outside 0-25")]
    IndexOutOfRange(u8),
}

/// A single letter stored as its contact index (A = 0 ... Z = 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);

    /// Builds a letter from its contact index.
    pub fn from_index(index: u8) -> Result<Self, AlphabetError> {
        if index >= NUM_LETTERS {
            return Err(AlphabetError::IndexOutOfRange(index));
        }
        Ok(Self(index))
    }

    /// Parses a letter, upper-casing ASCII lowercase input first.
    pub fn from_char(letter: char) -> Result<Self, AlphabetError> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper as u8 - b'A'))
        } else {
            Err(AlphabetError::NotALetter(letter))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Moves the letter `offset` contacts around the wheel, wrapping mod 26.
    pub fn offset(self, offset: i16) -> Self {
        let n = i16::from(NUM_LETTERS);
        Self((i16::from(self.0) + offset).rem_euclid(n) as u8)
    }

    /// Iterates A through Z.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..NUM_LETTERS).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = AlphabetError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::from_char(value)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Maps a letter to its contact index.
pub fn index_of(letter: char) -> Result<u8, AlphabetError> {
    Letter::from_char(letter).map(Letter::index)
}

/// Maps a contact index back to its letter.
pub fn letter_of(index: u8) -> Result<char, AlphabetError> {
    Letter::from_index(index).map(Letter::to_char)
}
