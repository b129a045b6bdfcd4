//! Configuration file parsing for mutant generation

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::MutationError;
use crate::operators::{Operator, OperatorFamily};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 2873465893;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub eligibility: EligibilityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            settings: Settings::default(),
            eligibility: EligibilityPolicy::default(),
        }
    }
}

/// Global settings for mutant generation
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Seed for the site shuffle
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Directory mutant files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Extension of mutant files
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Number of sites inverted in each mutant
    #[serde(default = "default_sites_per_mutant")]
    pub sites_per_mutant: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            sites_per_mutant: default_sites_per_mutant(),
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_sites_per_mutant() -> usize {
    1
}

/// Which operators make a node an eligible mutation site
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityPolicy {
    /// Seed operators for binary-operation nodes
    #[serde(default = "default_binary_seeds")]
    pub binary: Vec<Operator>,
    /// Seed operators for comparison nodes
    #[serde(default = "default_compare_seeds")]
    pub compare: Vec<Operator>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            binary: default_binary_seeds(),
            compare: default_compare_seeds(),
        }
    }
}

fn default_binary_seeds() -> Vec<Operator> {
    vec![Operator::Add]
}

fn default_compare_seeds() -> Vec<Operator> {
    vec![Operator::Equal]
}

impl EligibilityPolicy {
    pub fn is_binary_seed(&self, operator: Operator) -> bool {
        self.binary.contains(&operator)
    }

    pub fn is_compare_seed(&self, operator: Operator) -> bool {
        self.compare.contains(&operator)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, MutationError> {
        let content = std::fs::read_to_string(path).map_err(|e| MutationError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| MutationError::ConfigError {
                message: format!("Failed to parse config file '{}': {}", path.display(), e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check settings and seed operators for consistency
    pub fn validate(&self) -> Result<(), MutationError> {
        if self.settings.sites_per_mutant == 0 {
            return Err(MutationError::ConfigError {
                message: "sites_per_mutant must be at least 1".to_string(),
            });
        }

        if self.settings.extension.is_empty() {
            return Err(MutationError::ConfigError {
                message: "extension must not be empty".to_string(),
            });
        }

        if let Some(op) = self
            .eligibility
            .binary
            .iter()
            .find(|op| op.family() != OperatorFamily::Arithmetic)
        {
            return Err(MutationError::ConfigError {
                message: format!("'{}' is not an arithmetic operator", op),
            });
        }

        if let Some(op) = self
            .eligibility
            .compare
            .iter()
            .find(|op| op.family() != OperatorFamily::Relational)
        {
            return Err(MutationError::ConfigError {
                message: format!("'{}' is not a comparison operator", op),
            });
        }

        Ok(())
    }
}
