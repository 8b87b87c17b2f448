//! Single key press through the machine: step, plugboard, rotors, reflector,
//! rotors in reverse, plugboard.

use std::fmt;

use super::alphabet::Letter;
use super::plugboard::Plugboard;
use super::reflector::Reflector;
use super::stepper::RotorAssembly;

/// The letter carried by the signal at every stage of one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTrace {
    pub input: Letter,
    pub plugboard_in: Letter,
    /// After the right, middle and left rotor.
    pub forward: [Letter; 3],
    pub reflected: Letter,
    /// After the left, middle and right rotor.
    pub backward: [Letter; 3],
    pub output: Letter,
    /// Rotor positions `[right, middle, left]` the letter was enciphered at.
    pub positions: [u8; 3],
}

impl fmt::Display for SignalTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, m, l] = self.forward;
        let [bl, bm, br] = self.backward;
        write!(
            f,
            "{} > plug {} > R {} > M {} > L {} > UKW {} > L {} > M {} > R {} > plug {}",
            self.input, self.plugboard_in, r, m, l, self.reflected, bl, bm, br, self.output
        )
    }
}

/// Enciphers one letter, stepping the rotors first.
pub fn encode_letter(letter: Letter, rotors: &mut RotorAssembly, plugboard: &Plugboard, reflector: &Reflector) -> Letter {
    trace_letter(letter, rotors, plugboard, reflector).output
}

/// Same as [`encode_letter`] but keeps every intermediate letter.
pub fn trace_letter(letter: Letter, rotors: &mut RotorAssembly, plugboard: &Plugboard, reflector: &Reflector) -> SignalTrace {
    rotors.step();

    let plugboard_in = plugboard.swap(letter);
    let forward = rotors.forward(plugboard_in);
    let reflected = reflector.reflect(forward[2]);
    let backward = rotors.backward(reflected);

    SignalTrace {
        input: letter,
        plugboard_in,
        forward,
        reflected,
        backward,
        output: plugboard.swap(backward[2]),
        positions: rotors.positions(),
    }
}
