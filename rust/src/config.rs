//! Machine configuration as supplied by the surrounding application: which
//! rotors sit in which slot, their ring settings and start positions, the
//! reflector and the plugboard cables. The JSON shape is parsed into a raw form
//! first and then validated into typed settings the engine can trust.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogue::{ReflectorKind, RotorKind};
use crate::engine::alphabet::{Letter, NUM_LETTERS};

/// Most cables a 26-letter plugboard can hold.
pub const MAX_PLUGBOARD_PAIRS: usize = 13;
/// Cables issued with the wartime machine; used for generated key sheets.
pub const HISTORICAL_CABLES: usize = 10;

/// Invalid configuration, reported before anything reaches the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("expected exactly 3 rotors, got {0}")]
    WrongRotorCount(usize),
    #[error("unknown rotor type '{0}'")]
    UnknownRotor(String),
    #[error("unknown reflector '{0}'")]
    UnknownReflector(String),
    #[error("rotor {slot}: ring setting {value} is outside 0-25")]
    RingSettingOutOfRange { slot: usize, value: i64 },
    #[error("rotor {slot}: start position {value} is outside 0-25")]
    StartPositionOutOfRange { slot: usize, value: i64 },
    #[error("malformed plugboard pair {0:?}")]
    MalformedPair(Vec<String>),
    #[error("too many plugboard pairs: {0} (max 13)")]
    TooManyPairs(usize),
    #[error("plugboard pairs {0} with itself")]
    SelfPairedLetter(char),
    #[error("plugboard letter {0} is used more than once")]
    LetterReused(char),
    #[error("unknown debug level '{0}'")]
    UnknownDebugLevel(String),
}

/// Diagnostic verbosity for the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    #[default]
    Off,
    Info,
    Trace,
}

impl DebugLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebugLevel::Off => "off",
            DebugLevel::Info => "info",
            DebugLevel::Trace => "trace",
        }
    }
}

impl FromStr for DebugLevel {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" | "none" => Ok(DebugLevel::Off),
            "info" => Ok(DebugLevel::Info),
            "trace" | "debug" => Ok(DebugLevel::Trace),
            _ => Err(ConfigError::UnknownDebugLevel(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRotorSetting {
    pub spec: String,
    #[serde(rename = "ringSetting")]
    pub ring_setting: i64,
    #[serde(rename = "startPosition")]
    pub start_position: i64,
}

/// Configuration exactly as it appears on disk. Rotors are listed right to left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMachineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rotors: Vec<RawRotorSetting>,
    pub reflector: String,
    #[serde(rename = "plugboardPairs", default)]
    pub plugboard_pairs: Vec<Vec<String>>,
    #[serde(rename = "debugLevel", default, skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSetting {
    pub kind: RotorKind,
    pub ring_setting: u8,
    pub start_position: u8,
}

/// Validated configuration. `rotors` is ordered `[right, middle, left]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub name: Option<String>,
    pub rotors: [RotorSetting; 3],
    pub reflector: ReflectorKind,
    pub plugboard_pairs: Vec<(Letter, Letter)>,
    pub debug_level: DebugLevel,
}

impl RawMachineConfig {
    pub fn validate(&self) -> Result<MachineConfig, ConfigError> {
        let settings = self
            .rotors
            .iter()
            .enumerate()
            .map(|(slot, raw)| validate_rotor(slot, raw))
            .collect::<Result<Vec<_>, _>>()?;
        let rotors: [RotorSetting; 3] = settings
            .try_into()
            .map_err(|found: Vec<RotorSetting>| ConfigError::WrongRotorCount(found.len()))?;

        let reflector = ReflectorKind::from_str(&self.reflector).map_err(ConfigError::UnknownReflector)?;
        let plugboard_pairs = validate_pairs(&self.plugboard_pairs)?;
        let debug_level = match &self.debug_level {
            Some(level) => level.parse()?,
            None => DebugLevel::Off,
        };

        Ok(MachineConfig {
            name: self.name.clone(),
            rotors,
            reflector,
            plugboard_pairs,
            debug_level,
        })
    }
}

fn validate_rotor(slot: usize, raw: &RawRotorSetting) -> Result<RotorSetting, ConfigError> {
    let kind = RotorKind::from_str(&raw.spec).map_err(ConfigError::UnknownRotor)?;
    let ring_setting = contact_index(raw.ring_setting).ok_or(ConfigError::RingSettingOutOfRange {
        slot,
        value: raw.ring_setting,
    })?;
    let start_position = contact_index(raw.start_position).ok_or(ConfigError::StartPositionOutOfRange {
        slot,
        value: raw.start_position,
    })?;
    Ok(RotorSetting {
        kind,
        ring_setting,
        start_position,
    })
}

fn contact_index(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| *v < NUM_LETTERS)
}

fn validate_pairs(raw_pairs: &[Vec<String>]) -> Result<Vec<(Letter, Letter)>, ConfigError> {
    if raw_pairs.len() > MAX_PLUGBOARD_PAIRS {
        return Err(ConfigError::TooManyPairs(raw_pairs.len()));
    }

    let mut used = [false; NUM_LETTERS as usize];
    let mut pairs = Vec::with_capacity(raw_pairs.len());
    for raw in raw_pairs {
        let malformed = || ConfigError::MalformedPair(raw.clone());
        let [first, second] = raw.as_slice() else {
            return Err(malformed());
        };
        let first = single_letter(first).ok_or_else(malformed)?;
        let second = single_letter(second).ok_or_else(malformed)?;
        if first == second {
            return Err(ConfigError::SelfPairedLetter(first.to_char()));
        }
        for letter in [first, second] {
            let slot = &mut used[usize::from(letter.index())];
            if *slot {
                return Err(ConfigError::LetterReused(letter.to_char()));
            }
            *slot = true;
        }
        pairs.push((first, second));
    }
    Ok(pairs)
}

fn single_letter(text: &str) -> Option<Letter> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Letter::from_char(c).ok(),
        _ => None,
    }
}

impl From<&MachineConfig> for RawMachineConfig {
    fn from(config: &MachineConfig) -> Self {
        Self {
            name: config.name.clone(),
            rotors: config
                .rotors
                .iter()
                .map(|setting| RawRotorSetting {
                    spec: setting.kind.label().to_string(),
                    ring_setting: i64::from(setting.ring_setting),
                    start_position: i64::from(setting.start_position),
                })
                .collect(),
            reflector: config.reflector.label().to_string(),
            plugboard_pairs: config
                .plugboard_pairs
                .iter()
                .map(|(a, b)| vec![a.to_string(), b.to_string()])
                .collect(),
            debug_level: match config.debug_level {
                DebugLevel::Off => None,
                level => Some(level.as_str().to_string()),
            },
        }
    }
}

impl MachineConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawMachineConfig = serde_json::from_str(text).map_err(|e| ConfigError::Parse(format!("{e}")))?;
        raw.validate()
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&RawMachineConfig::from(self)).map_err(|e| ConfigError::Parse(format!("{e}")))
    }

    /// Draws a key-sheet style configuration: three different rotors, random
    /// rings and start positions, and ten plugboard cables.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut kinds = RotorKind::ALL;
        kinds.shuffle(rng);
        let rotors = [kinds[0], kinds[1], kinds[2]].map(|kind| RotorSetting {
            kind,
            ring_setting: rng.gen_range(0..NUM_LETTERS),
            start_position: rng.gen_range(0..NUM_LETTERS),
        });
        let reflector = ReflectorKind::ALL[rng.gen_range(0..ReflectorKind::ALL.len())];

        let mut letters: Vec<Letter> = Letter::all().collect();
        letters.shuffle(rng);
        let plugboard_pairs = letters
            .chunks_exact(2)
            .take(HISTORICAL_CABLES)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        Self {
            name: None,
            rotors,
            reflector,
            plugboard_pairs,
            debug_level: DebugLevel::Off,
        }
    }
}

/// Loads and validates a JSON configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<MachineConfig, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    MachineConfig::from_json_str(&raw_json)
}
