//! A single rotating wheel (Walze). The wiring is fixed; only the rotational
//! position changes while a message is typed.

use thiserror::Error;

use super::alphabet::{AlphabetError, Letter, NUM_LETTERS};
use super::wiring::{Wiring, WiringError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorError {
    #[error("invalid rotor wiring: {0}")]
    Wiring(#[from] WiringError),
    #[error("invalid notch letter: {0}")]
    Notch(#[from] AlphabetError),
    #[error("ring setting {0} is outside 0-25")]
    RingSettingOutOfRange(u8),
    #[error("rotor position {0} is outside 0-25")]
    PositionOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    reverse_wiring: Wiring,
    ring_setting: u8,
    start_position: u8,
    rotor_pos: u8,
    turnover_index: u8,
}

impl Rotor {
    /// Builds a rotor from its wiring string, turnover letter, ring setting
    /// and start position (both 0-25).
    pub fn new(wiring: &str, notch: char, ring_setting: u8, start_position: u8) -> Result<Self, RotorError> {
        Self::from_wiring(Wiring::parse(wiring)?, Letter::from_char(notch)?, ring_setting, start_position)
    }

    pub fn from_wiring(wiring: Wiring, notch: Letter, ring_setting: u8, start_position: u8) -> Result<Self, RotorError> {
        if ring_setting >= NUM_LETTERS {
            return Err(RotorError::RingSettingOutOfRange(ring_setting));
        }
        if start_position >= NUM_LETTERS {
            return Err(RotorError::PositionOutOfRange(start_position));
        }

        let turnover_index = notch.offset(-i16::from(ring_setting)).index();
        Ok(Self {
            reverse_wiring: wiring.inverse(),
            wiring,
            ring_setting,
            start_position,
            rotor_pos: start_position,
            turnover_index,
        })
    }

    pub fn step(&mut self) {
        self.rotor_pos = (self.rotor_pos + 1) % NUM_LETTERS;
    }

    /// True when the next step of this rotor also carries the rotor to its left.
    pub fn at_notch(&self) -> bool {
        self.rotor_pos == self.turnover_index
    }

    /// Substitutes a letter travelling from the entry disc toward the reflector.
    pub fn to_reflector(&self, letter: Letter) -> Letter {
        self.substitute(letter, &self.wiring)
    }

    /// Substitutes a letter on the return path from the reflector.
    pub fn from_reflector(&self, letter: Letter) -> Letter {
        self.substitute(letter, &self.reverse_wiring)
    }

    // Shift onto the wiring core by position minus ring, wire, then shift back.
    fn substitute(&self, letter: Letter, wiring: &Wiring) -> Letter {
        let shift = i16::from(self.rotor_pos) - i16::from(self.ring_setting);
        wiring.map(letter.offset(shift)).offset(-shift)
    }

    /// Returns the rotor to its configured start position.
    pub fn restart(&mut self) {
        self.rotor_pos = self.start_position;
    }

    pub fn set_position(&mut self, position: u8) -> Result<(), RotorError> {
        if position >= NUM_LETTERS {
            return Err(RotorError::PositionOutOfRange(position));
        }
        self.rotor_pos = position;
        Ok(())
    }

    pub fn position(&self) -> u8 {
        self.rotor_pos
    }

    /// Letter shown in the rotor window for the current position.
    pub fn position_letter(&self) -> Letter {
        Letter::A.offset(i16::from(self.rotor_pos))
    }

    pub fn start_position(&self) -> u8 {
        self.start_position
    }

    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    pub fn turnover_index(&self) -> u8 {
        self.turnover_index
    }
}

#[cfg(test)]
mod tests {
    use super::{Rotor, RotorError};
    use crate::engine::alphabet::Letter;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";

    fn letter(c: char) -> Letter {
        Letter::from_char(c).expect("test letters are valid")
    }

    #[test]
    fn substitutes_through_wiring_at_rest() {
        let rotor = Rotor::new(ROTOR_I, 'Q', 0, 0).expect("rotor should build");
        assert_eq!(rotor.to_reflector(letter('A')), letter('E'));
        assert_eq!(rotor.from_reflector(letter('E')), letter('A'));
    }

    #[test]
    fn position_shifts_contacts() {
        // Rotor I at B: A enters on contact B, wired to K, exits one contact lower at J.
        let rotor = Rotor::new(ROTOR_I, 'Q', 0, 1).expect("rotor should build");
        assert_eq!(rotor.to_reflector(letter('A')), letter('J'));
        assert_eq!(rotor.from_reflector(letter('J')), letter('A'));
    }

    #[test]
    fn ring_setting_offsets_wiring() {
        // Ring B at position A: A enters on contact Z, wired to J, exits at K.
        let rotor = Rotor::new(ROTOR_I, 'Q', 1, 0).expect("rotor should build");
        assert_eq!(rotor.to_reflector(letter('A')), letter('K'));
    }

    #[test]
    fn return_path_inverts_forward_path() {
        let rotor = Rotor::new(ROTOR_III, 'V', 7, 19).expect("rotor should build");
        for input in Letter::all() {
            assert_eq!(rotor.from_reflector(rotor.to_reflector(input)), input);
        }
    }

    #[test]
    fn turnover_index_accounts_for_ring_setting() {
        let plain = Rotor::new(ROTOR_III, 'V', 0, 0).expect("rotor should build");
        assert_eq!(plain.turnover_index(), 21);
        let ringed = Rotor::new(ROTOR_I, 'Q', 20, 0).expect("rotor should build");
        assert_eq!(ringed.turnover_index(), 22);
        assert_eq!(ringed.ring_setting(), 20);
        let wrapped = Rotor::new(ROTOR_I, 'Q', 25, 0).expect("rotor should build");
        assert_eq!(wrapped.turnover_index(), 17);
    }

    #[test]
    fn at_notch_tracks_position() {
        let mut rotor = Rotor::new(ROTOR_I, 'Q', 0, 15).expect("rotor should build");
        assert!(!rotor.at_notch());
        rotor.step();
        assert!(rotor.at_notch());
        rotor.step();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn twenty_six_steps_return_to_start() {
        let mut rotor = Rotor::new(ROTOR_I, 'Q', 3, 11).expect("rotor should build");
        for _ in 0..26 {
            rotor.step();
        }
        assert_eq!(rotor.position(), 11);
    }

    #[test]
    fn restart_returns_to_start_position() {
        let mut rotor = Rotor::new(ROTOR_I, 'Q', 0, 24).expect("rotor should build");
        rotor.step();
        rotor.step();
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.position_letter(), letter('A'));
        rotor.restart();
        assert_eq!(rotor.position(), rotor.start_position());
        assert_eq!(rotor.position(), 24);
        assert_eq!(rotor.position_letter(), letter('Y'));
    }

    #[test]
    fn rejects_out_of_range_settings() {
        assert_eq!(
            Rotor::new(ROTOR_I, 'Q', 26, 0).unwrap_err(),
            RotorError::RingSettingOutOfRange(26)
        );
        assert_eq!(
            Rotor::new(ROTOR_I, 'Q', 0, 30).unwrap_err(),
            RotorError::PositionOutOfRange(30)
        );
        let mut rotor = Rotor::new(ROTOR_I, 'Q', 0, 0).expect("rotor should build");
        assert_eq!(rotor.set_position(26).unwrap_err(), RotorError::PositionOutOfRange(26));
    }
}
