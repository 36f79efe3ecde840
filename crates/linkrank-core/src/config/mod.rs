//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::rank::{validate_damping, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Ranking parameters shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    pub damping: f64,

    /// Walk length for the sampling estimator
    pub samples: usize,

    /// Per-page convergence tolerance for the iterative solver
    pub tolerance: f64,

    /// Iteration cap for the iterative solver
    pub max_iterations: usize,

    /// Seed for the random surfer (system entropy when unset)
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: env_value("LINKRANK_DAMPING").unwrap_or(crate::DEFAULT_DAMPING),
            samples: env_value("LINKRANK_SAMPLES").unwrap_or(crate::DEFAULT_SAMPLES),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: env_value("LINKRANK_SEED"),
        }
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    parse_env_value(key, std::env::var(key).ok())
}

/// Parse a raw environment value, warning when it is set but malformed
fn parse_env_value<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value, using default", key, raw);
            None
        }
    }
}

impl RankConfig {
    /// Load config from the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every parameter is usable by the estimators
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping).map_err(|e| LinkRankError::Config(e.to_string()))?;
        if self.samples == 0 {
            return Err(LinkRankError::Config("samples must be at least 1".into()));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(LinkRankError::Config(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::Config(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "tolerance: 0.0001\nseed: 7\n").unwrap();

        let config = RankConfig::load_from(&path).unwrap();
        assert_eq!(config.tolerance, 0.0001);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_env_value() {
        assert_eq!(
            parse_env_value::<f64>("LINKRANK_DAMPING", Some("0.5".into())),
            Some(0.5)
        );
        assert_eq!(
            parse_env_value::<u64>("LINKRANK_SEED", Some(" 42 ".into())),
            Some(42)
        );
        assert_eq!(parse_env_value::<usize>("LINKRANK_SAMPLES", None), None);
    }

    #[test]
    fn test_malformed_env_value_falls_back() {
        assert_eq!(
            parse_env_value::<f64>("LINKRANK_DAMPING", Some("high".into())),
            None
        );
        assert_eq!(
            parse_env_value::<usize>("LINKRANK_SAMPLES", Some("-3".into())),
            None
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = RankConfig::load_from(&dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, LinkRankError::Io(_)));
    }

    #[test]
    fn test_load_malformed_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: [not, a, number]\n").unwrap();

        assert!(matches!(
            RankConfig::load_from(&path),
            Err(LinkRankError::Yaml(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let base = RankConfig {
            damping: 0.85,
            samples: 100,
            tolerance: 0.001,
            max_iterations: 10,
            seed: None,
        };
        assert!(base.validate().is_ok());

        for bad in [
            RankConfig { damping: 1.0, ..base.clone() },
            RankConfig { samples: 0, ..base.clone() },
            RankConfig { tolerance: 0.0, ..base.clone() },
            RankConfig { max_iterations: 0, ..base.clone() },
        ] {
            assert!(matches!(bad.validate(), Err(LinkRankError::Config(_))));
        }
    }
}
