//! Integrity helpers. A configuration fingerprint is the SHA-256 of its
//! canonical JSON form, so two files that describe the same machine setup get
//! the same identifier regardless of whitespace, key order or label spelling.

use sha2::{Digest, Sha256};

use crate::config::{ConfigError, MachineConfig, RawMachineConfig};

/// Produces a raw SHA-256 digest of the provided bytes.
pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Returns the hexadecimal representation of a SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = sha256_digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Fingerprint of the machine setup. The name and debug level are left out:
/// they do not change what the machine enciphers.
pub fn config_fingerprint(config: &MachineConfig) -> Result<String, ConfigError> {
    let mut raw = RawMachineConfig::from(config);
    raw.name = None;
    raw.debug_level = None;
    let canonical = serde_json::to_vec(&raw).map_err(|e| ConfigError::Parse(format!("{e}")))?;
    Ok(sha256_hex(&canonical))
}
