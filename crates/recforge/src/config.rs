//! Generation run configuration
//!
//! Typed configuration with serde defaults and an optional TOML file
//! loader. Validation is fail-fast: a bad value is rejected before the
//! first record is synthesized.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration errors caught before a run starts
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_open_days must be at least 1 (got {0})")]
    InvalidMaxOpenDays(i64),

    #[error("max_days_back must be at least 1 (got {0})")]
    InvalidMaxDaysBack(i64),

    #[error("unassigned_probability must be within [0, 1] (got {0})")]
    InvalidUnassignedProbability(f64),
}

/// Knobs for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Dry run: no insert reaches the record store
    #[serde(default = "default_simulate")]
    pub simulate: bool,

    /// Force every record into the terminal Closed state (for training data)
    #[serde(default)]
    pub resolved_only: bool,

    /// Number of records to synthesize
    #[serde(default = "default_count")]
    pub count: u32,

    /// Upper bound (exclusive) on how many days back a record opens
    #[serde(default = "default_max_days_back")]
    pub max_days_back: i64,

    /// Bound on how long a record stays open before closure
    #[serde(default = "default_max_open_days")]
    pub max_open_days: i64,

    /// Probability a record is left without an assigned agent
    #[serde(default = "default_unassigned_probability")]
    pub unassigned_probability: f64,

    /// RNG seed for replayable runs; omit for an entropy-seeded run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_simulate() -> bool {
    true
}

fn default_count() -> u32 {
    20
}

fn default_max_days_back() -> i64 {
    34
}

fn default_max_open_days() -> i64 {
    14
}

fn default_unassigned_probability() -> f64 {
    0.30
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            simulate: default_simulate(),
            resolved_only: false,
            count: default_count(),
            max_days_back: default_max_days_back(),
            max_open_days: default_max_open_days(),
            unassigned_probability: default_unassigned_probability(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a TOML file. Missing keys take their
    /// defaults; the result is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: GenerationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the generation loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_open_days < 1 {
            return Err(ConfigError::InvalidMaxOpenDays(self.max_open_days));
        }
        if self.max_days_back < 1 {
            return Err(ConfigError::InvalidMaxDaysBack(self.max_days_back));
        }
        if !(0.0..=1.0).contains(&self.unassigned_probability)
            || self.unassigned_probability.is_nan()
        {
            return Err(ConfigError::InvalidUnassignedProbability(
                self.unassigned_probability,
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.simulate);
        assert!(!config.resolved_only);
        assert_eq!(config.count, 20);
        assert_eq!(config.max_days_back, 34);
        assert_eq!(config.max_open_days, 14);
        assert!((config.unassigned_probability - 0.30).abs() < f64::EPSILON);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_rejects_zero_max_open_days() {
        let config = GenerationConfig {
            max_open_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxOpenDays(0))
        ));
    }

    #[test]
    fn test_rejects_nonpositive_max_days_back() {
        let config = GenerationConfig {
            max_days_back: -3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxDaysBack(-3))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let config = GenerationConfig {
                unassigned_probability: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_load_applies_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count = 100\nresolved_only = true\nseed = 42").unwrap();

        let config = GenerationConfig::load(file.path()).unwrap();
        assert_eq!(config.count, 100);
        assert!(config.resolved_only);
        assert_eq!(config.seed, Some(42));
        // untouched keys keep their defaults
        assert!(config.simulate);
        assert_eq!(config.max_open_days, 14);
    }

    #[test]
    fn test_load_surfaces_validation_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unassigned_probability = 2.0").unwrap();
        assert!(GenerationConfig::load(file.path()).is_err());
    }
}
