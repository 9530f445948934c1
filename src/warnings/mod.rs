//! Identity collision and date of birth warnings.
//!
//! Warnings are never persisted. They are recomputed on every submission
//! and block it until the donor acknowledges the exact warning shown.

pub mod collision;
pub mod dob;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::actor::ActorType;
use crate::paths::hex_encode;

pub use collision::find_match;
pub use dob::DobWarning;

/// A just-submitted actor shares a full name with an existing actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameNameWarning {
    pub candidate: ActorType,
    pub matched: ActorType,
    pub first_names: String,
    pub last_name: String,
    /// Token a donor echoes back in `ignore-name-warning` to continue.
    pub signature: String,
}

impl SameNameWarning {
    pub fn new(candidate: ActorType, matched: ActorType, first_names: &str, last_name: &str) -> Self {
        let first_names = first_names.trim().to_string();
        let last_name = last_name.trim().to_string();
        let signature = signature(candidate, matched, &first_names, &last_name);
        Self {
            candidate,
            matched,
            first_names,
            last_name,
            signature,
        }
    }
}

/// Fingerprint of a warning: SHA-256 over roles and lower-cased names,
/// truncated to 8 bytes of hex.
pub fn signature(candidate: ActorType, matched: ActorType, first_names: &str, last_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(candidate.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(matched.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(first_names.trim().to_lowercase().as_bytes());
    hasher.update(b"|");
    hasher.update(last_name.trim().to_lowercase().as_bytes());
    let digest = hasher.finalize();
    hex_encode(&digest[..8])
}

/// Looks for a name collision and returns it unless `ignore` acknowledges it.
pub fn name_warning(
    candidate: ActorType,
    matched: Option<ActorType>,
    first_names: &str,
    last_name: &str,
    ignore: &str,
) -> Option<SameNameWarning> {
    let warning = SameNameWarning::new(candidate, matched?, first_names, last_name);
    if warning.signature == ignore.trim() {
        None
    } else {
        Some(warning)
    }
}

/// Returns the date of birth warning unless `ignore` carries its key.
pub fn dob_warning(warning: Option<DobWarning>, ignore: &str) -> Option<DobWarning> {
    warning.filter(|w| w.key() != ignore.trim())
}

#[cfg(test)]
#[path = "tests/warnings_tests.rs"]
mod tests;
