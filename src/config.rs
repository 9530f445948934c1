use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::types::Address;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct JourneyConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub warnings: WarningsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Offline postcode lookup data, keyed by postcode.
    #[serde(default)]
    pub address_fixtures: BTreeMap<String, Vec<Address>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    /// Where documents are written. Defaults to `~/.lpa-journey/documents`.
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,
}

/// Age thresholds for date of birth warnings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WarningsConfig {
    #[serde(default = "default_minimum_attorney_age")]
    pub minimum_attorney_age: u32,
    #[serde(default = "default_maximum_plausible_age")]
    pub maximum_plausible_age: u32,
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            minimum_attorney_age: default_minimum_attorney_age(),
            maximum_plausible_age: default_maximum_plausible_age(),
        }
    }
}

fn default_minimum_attorney_age() -> u32 {
    18
}

fn default_maximum_plausible_age() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_people_to_notify")]
    pub max_people_to_notify: usize,
    #[serde(default = "default_max_restrictions_length")]
    pub max_restrictions_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_people_to_notify: default_max_people_to_notify(),
            max_restrictions_length: default_max_restrictions_length(),
        }
    }
}

fn default_max_people_to_notify() -> usize {
    5
}

fn default_max_restrictions_length() -> usize {
    10000
}

impl JourneyConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        const DEFAULT_JOURNEY_YAML: &str = include_str!("../journey.yaml");

        serde_yaml::from_str(DEFAULT_JOURNEY_YAML)
            .expect("Failed to parse embedded journey.yaml - this is a bug in the journey.yaml file")
    }

    /// Loads `path` when given, else the home config file if present, else the embedded default.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let home_config = crate::paths::config_path()?;
        if home_config.exists() {
            return Self::load(&home_config);
        }
        Ok(Self::default_config())
    }

    fn validate(&self) -> Result<()> {
        if self.warnings.minimum_attorney_age >= self.warnings.maximum_plausible_age {
            anyhow::bail!(
                "minimum_attorney_age ({}) must be below maximum_plausible_age ({})",
                self.warnings.minimum_attorney_age,
                self.warnings.maximum_plausible_age
            );
        }

        if self.limits.max_people_to_notify == 0 {
            anyhow::bail!("max_people_to_notify must be at least 1");
        }

        if self.limits.max_restrictions_length == 0 {
            anyhow::bail!("max_restrictions_length must be at least 1");
        }

        for (postcode, addresses) in &self.address_fixtures {
            if addresses.iter().any(Address::is_empty) {
                anyhow::bail!("Address fixture for '{}' has an address without line1", postcode);
            }
        }

        Ok(())
    }

    /// Documents directory from config, falling back to the home layout.
    pub fn documents_dir(&self) -> Result<PathBuf> {
        match &self.storage.documents_dir {
            Some(dir) => Ok(dir.clone()),
            None => crate::paths::documents_dir(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
