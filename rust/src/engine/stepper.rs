//! Three-rotor assembly and its stepping mechanism, double step included.

use super::alphabet::Letter;
use super::rotor::Rotor;

/// Rotors in signal order: right (fast), middle, left (slow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorAssembly {
    right: Rotor,
    middle: Rotor,
    left: Rotor,
}

impl RotorAssembly {
    /// Takes rotors as `[right, middle, left]`.
    pub fn new(rotors: [Rotor; 3]) -> Self {
        let [right, middle, left] = rotors;
        Self { right, middle, left }
    }

    /// Advances the wheels for one key press.
    ///
    /// Both notch checks read the positions from before this key press. A
    /// middle rotor sitting on its own notch steps itself along with the left
    /// rotor; if the right rotor is also at its notch the middle rotor moves
    /// again, which is the double step of the real machine.
    pub fn step(&mut self) {
        let middle_at_notch = self.middle.at_notch();
        let right_at_notch = self.right.at_notch();

        if middle_at_notch {
            self.middle.step();
            self.left.step();
        }
        if right_at_notch {
            self.middle.step();
        }
        self.right.step();
    }

    /// Forward pass, right to left. Returns the signal as it leaves each
    /// rotor; the last entry is what reaches the reflector.
    pub fn forward(&self, letter: Letter) -> [Letter; 3] {
        let mut signal = letter;
        self.rotors().map(|rotor| {
            signal = rotor.to_reflector(signal);
            signal
        })
    }

    /// Return pass, left to right. Same shape as [`RotorAssembly::forward`],
    /// so the last entry is the letter heading back to the plugboard.
    pub fn backward(&self, letter: Letter) -> [Letter; 3] {
        let [right, middle, left] = self.rotors();
        let mut signal = letter;
        [left, middle, right].map(|rotor| {
            signal = rotor.from_reflector(signal);
            signal
        })
    }

    /// Rotors in signal order `[right, middle, left]`.
    pub fn rotors(&self) -> [&Rotor; 3] {
        [&self.right, &self.middle, &self.left]
    }

    pub fn rotors_mut(&mut self) -> [&mut Rotor; 3] {
        [&mut self.right, &mut self.middle, &mut self.left]
    }

    /// Current positions as `[right, middle, left]`.
    pub fn positions(&self) -> [u8; 3] {
        self.rotors().map(Rotor::position)
    }

    /// Window letters as an operator reads them, left rotor first.
    pub fn window(&self) -> String {
        self.rotors()
            .iter()
            .rev()
            .map(|rotor| rotor.position_letter().to_char())
            .collect()
    }

    pub fn restart(&mut self) {
        for rotor in self.rotors_mut() {
            rotor.restart();
        }
    }
}
