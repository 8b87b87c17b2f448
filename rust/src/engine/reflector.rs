//! Reflector (Umkehrwalze): sends the signal back through the rotor stack.

use super::alphabet::Letter;
use super::wiring::{Wiring, WiringError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Builds a reflector from a reciprocal, fixed-point free wiring string.
    pub fn new(wiring: &str) -> Result<Self, WiringError> {
        Ok(Self {
            wiring: Wiring::parse_reflecting(wiring)?,
        })
    }

    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }
}
