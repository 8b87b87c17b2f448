//! An assembled machine: three rotors, a plugboard and a reflector owned as a
//! single value. This is the surface the rest of an application talks to;
//! it accepts characters, routes non-letters around the engine and exposes the
//! rotor windows for display.

use thiserror::Error;

use crate::config::MachineConfig;
use crate::engine::alphabet::{AlphabetError, Letter};
use crate::engine::pipeline::{self, SignalTrace};
use crate::engine::plugboard::{Plugboard, PlugboardError};
use crate::engine::reflector::Reflector;
use crate::engine::rotor::{Rotor, RotorError};
use crate::engine::stepper::RotorAssembly;
use crate::engine::wiring::WiringError;

#[derive(Debug, Error)]
pub enum MachineError {
    #[error("rotor error: {0}")]
    Rotor(#[from] RotorError),
    #[error("reflector error: {0}")]
    Reflector(#[from] WiringError),
    #[error("plugboard error: {0}")]
    Plugboard(#[from] PlugboardError),
    #[error("input error: {0}")]
    Input(#[from] AlphabetError),
}

#[derive(Debug, Clone)]
pub struct Machine {
    rotors: RotorAssembly,
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Machine {
    /// Assembles a machine from already-built parts. Rotors are `[right, middle, left]`.
    pub fn new(rotors: [Rotor; 3], plugboard: Plugboard, reflector: Reflector) -> Self {
        Self {
            rotors: RotorAssembly::new(rotors),
            plugboard,
            reflector,
        }
    }

    pub fn from_config(config: &MachineConfig) -> Result<Self, MachineError> {
        let mut plugboard = Plugboard::new();
        seed_plugboard(&mut plugboard, config)?;
        Ok(Self::new(build_rotors(config)?, plugboard, config.reflector.build()?))
    }

    /// Applies a new configuration in place. The new parts are built off to
    /// the side, with the plugboard cleared before its new cables go in, and
    /// only swapped in once all of them succeed; on error the machine is
    /// left exactly as it was.
    pub fn reconfigure(&mut self, config: &MachineConfig) -> Result<(), MachineError> {
        let rotors = build_rotors(config)?;
        let reflector = config.reflector.build()?;
        let mut plugboard = self.plugboard.clone();
        plugboard.reset();
        seed_plugboard(&mut plugboard, config)?;

        self.rotors = RotorAssembly::new(rotors);
        self.reflector = reflector;
        self.plugboard = plugboard;
        Ok(())
    }

    /// Enciphers one letter, advancing the rotors.
    pub fn encode_letter(&mut self, letter: char) -> Result<char, MachineError> {
        Ok(self.trace_letter(letter)?.output.to_char())
    }

    /// Enciphers one letter and returns the full signal path.
    pub fn trace_letter(&mut self, letter: char) -> Result<SignalTrace, MachineError> {
        let letter = Letter::from_char(letter)?;
        Ok(pipeline::trace_letter(letter, &mut self.rotors, &self.plugboard, &self.reflector))
    }

    /// Enciphers a message. Letters are upper-cased and encoded; anything else
    /// (spaces, digits, punctuation) is copied through without stepping.
    pub fn encode(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| match Letter::from_char(c) {
                Ok(letter) => {
                    pipeline::encode_letter(letter, &mut self.rotors, &self.plugboard, &self.reflector).to_char()
                }
                Err(_) => c,
            })
            .collect()
    }

    /// Like [`Machine::encode`] but also returns the trace of every letter.
    pub fn encode_traced(&mut self, text: &str) -> (String, Vec<SignalTrace>) {
        let mut traces = Vec::new();
        let output = text
            .chars()
            .map(|c| match Letter::from_char(c) {
                Ok(letter) => {
                    let trace = pipeline::trace_letter(letter, &mut self.rotors, &self.plugboard, &self.reflector);
                    traces.push(trace);
                    trace.output.to_char()
                }
                Err(_) => c,
            })
            .collect();
        (output, traces)
    }

    /// Returns every rotor to its configured start position.
    pub fn restart(&mut self) {
        self.rotors.restart();
    }

    /// Current positions as `[right, middle, left]`.
    pub fn positions(&self) -> [u8; 3] {
        self.rotors.positions()
    }

    /// Rotor window letters, left rotor first.
    pub fn window(&self) -> String {
        self.rotors.window()
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

fn build_rotors(config: &MachineConfig) -> Result<[Rotor; 3], RotorError> {
    let [right, middle, left] = config.rotors;
    Ok([
        right.kind.build(right.ring_setting, right.start_position)?,
        middle.kind.build(middle.ring_setting, middle.start_position)?,
        left.kind.build(left.ring_setting, left.start_position)?,
    ])
}

fn seed_plugboard(plugboard: &mut Plugboard, config: &MachineConfig) -> Result<(), PlugboardError> {
    for (a, b) in &config.plugboard_pairs {
        plugboard.add_pair(a.to_char(), b.to_char())?;
    }
    Ok(())
}
