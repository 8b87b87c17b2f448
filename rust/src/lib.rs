//! Enigma I rotor cipher engine. The `engine` modules model the wheels and the
//! signal path; `catalogue`, `config` and `machine` turn a saved configuration
//! into a ready-to-type machine.

pub mod catalogue;
pub mod config;
pub mod engine;
pub mod integrity;
pub mod machine;

pub use machine::{Machine, MachineError};
