//! End-to-end checks against published Enigma I behaviour, driven through
//! the public API the way an application would use it.

use enigma_rs::catalogue::{ReflectorKind, RotorKind};
use enigma_rs::engine::alphabet::Letter;
use enigma_rs::engine::pipeline::encode_letter;
use enigma_rs::engine::plugboard::{Plugboard, PlugboardError};
use enigma_rs::engine::stepper::RotorAssembly;
use enigma_rs::Machine;

fn machine(kinds: [RotorKind; 3], rings: [u8; 3], starts: [u8; 3], reflector: ReflectorKind, pairs: &[(char, char)]) -> Machine {
    let rotors = [0, 1, 2].map(|slot| {
        kinds[slot]
            .build(rings[slot], starts[slot])
            .expect("catalogue rotor should build")
    });
    let mut plugboard = Plugboard::new();
    for (a, b) in pairs {
        plugboard.add_pair(*a, *b).expect("pair should plug");
    }
    Machine::new(rotors, plugboard, reflector.build().expect("catalogue reflector should build"))
}

/// Rotors are given right to left: III on the right, I on the left.
const I_II_III: [RotorKind; 3] = [RotorKind::III, RotorKind::II, RotorKind::I];

#[test]
fn test_textbook_vector() {
    let mut enigma = machine(I_II_III, [0, 0, 0], [0, 0, 0], ReflectorKind::UkwB, &[]);
    assert_eq!(enigma.encode("AAAAA"), "BDZGO");
}

#[test]
fn test_ring_settings_vector() {
    let mut enigma = machine(I_II_III, [1, 1, 1], [0, 0, 0], ReflectorKind::UkwB, &[]);
    assert_eq!(enigma.encode("AAAAA"), "EWTYX");
}

#[test]
fn test_plugboard_vector() {
    let mut enigma = machine(I_II_III, [0, 0, 0], [0, 0, 0], ReflectorKind::UkwB, &[('A', 'B'), ('C', 'D')]);
    assert_eq!(enigma.encode("HELLO WORLD"), "ILACB BMTBE");
}

#[test]
fn test_double_step_through_a_message() {
    // Window ADU: the middle rotor reaches its notch and steps twice in a row.
    let mut enigma = machine(I_II_III, [0, 0, 0], [20, 3, 0], ReflectorKind::UkwB, &[]);
    assert_eq!(enigma.encode("AAA"), "EQI");
    assert_eq!(enigma.window(), "BFX");
}

#[test]
fn test_middle_rotor_at_notch_steps_left_and_itself() {
    let rotors = [
        RotorKind::I.build(0, 0).unwrap(),
        RotorKind::III.build(0, 21).unwrap(),
        RotorKind::II.build(0, 0).unwrap(),
    ];
    let mut assembly = RotorAssembly::new(rotors);
    let reflector = ReflectorKind::UkwB.build().unwrap();
    encode_letter(Letter::A, &mut assembly, &Plugboard::new(), &reflector);
    assert_eq!(assembly.positions(), [1, 22, 1]);
}

#[test]
fn test_other_catalogue_wheels() {
    let mut enigma = machine(
        [RotorKind::V, RotorKind::IV, RotorKind::II],
        [5, 10, 15],
        [3, 7, 11],
        ReflectorKind::UkwC,
        &[('A', 'Z'), ('B', 'Y'), ('M', 'N')],
    );
    assert_eq!(enigma.encode("THEQUICKBROWNFOX"), "NVNVXETQUCHGUJHD");
    assert_eq!(enigma.positions(), [19, 7, 11]);
}

#[test]
fn test_plugboard_error_taxonomy() {
    let mut plugboard = Plugboard::new();
    assert_eq!(plugboard.add_pair('A', 'A'), Err(PlugboardError::InvalidPlugboardPair('A')));
    plugboard.add_pair('A', 'B').expect("pair should plug");
    assert_eq!(plugboard.add_pair('A', 'C'), Err(PlugboardError::DuplicateMapping('A')));
    assert_eq!(Plugboard::new().remove_pair('Z'), Err(PlugboardError::NotMapped('Z')));
}
