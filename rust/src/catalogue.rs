//! Historical wheel catalogue of the Enigma I: five rotors and two reflectors.
//! Labels are resolved here so the engine only ever sees known wirings.

use std::fmt;
use std::str::FromStr;

use crate::engine::reflector::Reflector;
use crate::engine::rotor::{Rotor, RotorError};
use crate::engine::wiring::WiringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorKind {
    pub const ALL: [RotorKind; 5] = [RotorKind::I, RotorKind::II, RotorKind::III, RotorKind::IV, RotorKind::V];

    pub fn wiring(self) -> &'static str {
        match self {
            RotorKind::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorKind::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorKind::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorKind::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorKind::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Window letter shown when the rotor is about to carry its neighbour.
    pub fn turnover(self) -> char {
        match self {
            RotorKind::I => 'Q',
            RotorKind::II => 'E',
            RotorKind::III => 'V',
            RotorKind::IV => 'J',
            RotorKind::V => 'Z',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
            RotorKind::IV => "IV",
            RotorKind::V => "V",
        }
    }

    pub fn build(self, ring_setting: u8, start_position: u8) -> Result<Rotor, RotorError> {
        Rotor::new(self.wiring(), self.turnover(), ring_setting, start_position)
    }
}

impl FromStr for RotorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RotorKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| value.to_string())
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    UkwB,
    UkwC,
}

impl ReflectorKind {
    pub const ALL: [ReflectorKind; 2] = [ReflectorKind::UkwB, ReflectorKind::UkwC];

    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorKind::UkwB => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorKind::UkwC => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReflectorKind::UkwB => "UKW_B",
            ReflectorKind::UkwC => "UKW_C",
        }
    }

    pub fn build(self) -> Result<Reflector, WiringError> {
        Reflector::new(self.wiring())
    }
}

impl FromStr for ReflectorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "UKW_B" | "B" => Ok(ReflectorKind::UkwB),
            "UKW_C" | "C" => Ok(ReflectorKind::UkwC),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for ReflectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
