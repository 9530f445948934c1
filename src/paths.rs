//! Home-based storage paths.
//!
//! Everything lives under `~/.lpa-journey/` unless `LPA_JOURNEY_HOME` points elsewhere:
//! - `documents/` - one JSON file per LPA document
//! - `logs/` - structured submission log
//! - `config.yaml` - optional configuration override

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const JOURNEY_DIR: &str = ".lpa-journey";

/// Overrides the home directory, mainly for tests and containers.
pub const HOME_ENV: &str = "LPA_JOURNEY_HOME";

/// Returns the journey home directory: `~/.lpa-journey/`
///
/// Creates the directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if:
/// - Home directory cannot be determined
/// - Directory creation fails
pub fn journey_home_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .context("Could not determine home directory for document storage")?
            .join(JOURNEY_DIR),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create journey directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns the documents directory: `~/.lpa-journey/documents/`
pub fn documents_dir() -> Result<PathBuf> {
    let dir = journey_home_dir()?.join("documents");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create documents directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns the logs directory: `~/.lpa-journey/logs/`
pub fn logs_dir() -> Result<PathBuf> {
    let dir = journey_home_dir()?.join("logs");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns the optional config file path: `~/.lpa-journey/config.yaml`
pub fn config_path() -> Result<PathBuf> {
    Ok(journey_home_dir()?.join("config.yaml"))
}

/// Encodes bytes as lowercase hex string.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
