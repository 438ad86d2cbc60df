//! Configuration management for CodeScope

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for CodeScope
///
/// Built once at engine construction and read-only afterwards; the engine
/// never mutates configuration at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Analysis settings
    pub analysis: AnalysisConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive, e.g. "info" or "codescope_core=debug"
    pub level: String,

    /// Emit JSON-formatted log lines instead of human-readable ones
    pub json: bool,
}

/// Settings for the analysis engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of files analyzed concurrently during a project walk
    pub concurrency: usize,

    /// Whether the project walk follows symbolic links
    pub follow_links: bool,

    /// Skip files larger than this many bytes during a project walk
    pub max_file_size: Option<u64>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
            analysis: AnalysisConfig {
                concurrency: 8,
                follow_links: false,
                max_file_size: None,
            },
        }
    }
}

impl ScopeConfig {
    /// Load configuration with auto-discovery and environment overrides.
    ///
    /// Sources, later ones winning: built-in defaults, the first existing
    /// file among [`ScopeConfig::search_paths`], then `CODESCOPE_*`
    /// environment variables (`CODESCOPE_ANALYSIS__CONCURRENCY=4`).
    pub fn load_with_env() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&ScopeConfig::default())?);

        for path in Self::search_paths() {
            if path.exists() {
                builder = builder.add_source(config::File::from(path));
                break;
            }
        }

        let loaded: ScopeConfig = builder
            .add_source(
                config::Environment::with_prefix("CODESCOPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration from an explicit TOML file plus defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let loaded: ScopeConfig = config::Config::builder()
            .add_source(config::Config::try_from(&ScopeConfig::default())?)
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.analysis.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.concurrency".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidFormat {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Candidate configuration file locations, in order of preference.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("codescope.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("codescope").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScopeConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.analysis.concurrency >= 1);
        assert!(!config.analysis.follow_links);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = ScopeConfig::default();
        config.analysis.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ScopeConfig::default();
        let rendered = config.to_toml_string().unwrap();
        let parsed: ScopeConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.analysis.concurrency, config.analysis.concurrency);
        assert_eq!(parsed.logging.level, config.logging.level);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ScopeConfig::load_from_file("/definitely/not/here.toml");
        assert!(result.is_err());
    }
}
