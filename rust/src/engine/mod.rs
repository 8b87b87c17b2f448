//! The cipher engine proper: letter codec, plugboard, rotors, reflector, the
//! stepping mechanism and the per-letter signal path. Nothing in here knows
//! about configuration files or rotor labels; callers hand it validated parts.

pub mod alphabet;
pub mod pipeline;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod stepper;
pub mod wiring;
