//! Configuration for tangle
//!
//! This module handles configuration settings for graph construction,
//! logging and metrics. Every field has a default so an empty TOML file is
//! a valid configuration.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_EDGE_CAPACITY, DEFAULT_NODE_CAPACITY, ENV_LOG_LEVEL,
    ENV_MERGE_STRATEGY,
};
use crate::types::{Error, Result};
use crate::{log_info, log_warn};

/// Log levels accepted by [`LoggingConfig::level`]
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Which graph survives when an edge joins two graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// The graph holding fewer nodes and edges is moved into the other one
    #[default]
    SmallerIntoLarger,
    /// The graph of the first endpoint always receives
    IntoFirst,
}

impl std::str::FromStr for MergeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "smaller_into_larger" => Ok(Self::SmallerIntoLarger),
            "into_first" => Ok(Self::IntoFirst),
            other => Err(Error::config(format!("Unknown merge strategy: {}", other))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics settings
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Graph construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Receiver selection when merging
    #[serde(default)]
    pub merge_strategy: MergeStrategy,

    /// Walk every invariant after each structural mutation
    #[serde(default)]
    pub check_invariants: bool,

    /// Initial node slot capacity
    #[serde(default = "default_node_capacity")]
    pub node_capacity: usize,

    /// Initial edge slot capacity
    #[serde(default = "default_edge_capacity")]
    pub edge_capacity: usize,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Metrics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Record prometheus counters
    #[serde(default = "default_metrics_enabled")]
    pub enable: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            merge_strategy: MergeStrategy::default(),
            check_invariants: false,
            node_capacity: default_node_capacity(),
            edge_capacity: default_edge_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enable: default_metrics_enabled() }
    }
}

// Default value functions for serde
fn default_node_capacity() -> usize { DEFAULT_NODE_CAPACITY }
fn default_edge_capacity() -> usize { DEFAULT_EDGE_CAPACITY }
fn default_log_level() -> String { "info".to_string() }
fn default_metrics_enabled() -> bool { true }

impl Config {
    /// Load `tangle.toml` from the working directory if present, then apply
    /// environment overrides and validate
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        use std::env;

        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        if let Ok(strategy) = env::var(ENV_MERGE_STRATEGY) {
            self.graph.merge_strategy = strategy.parse()?;
        }

        Ok(())
    }

    /// Reject settings that cannot work
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!("Unknown log level: {}", self.logging.level)));
        }

        Ok(())
    }
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&str>) -> Config {
    match path {
        Some(path) => match Config::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => {
                log_info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                log_warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                Config::default()
            }
        },
        None => {
            log_info!("No config file specified, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.graph.merge_strategy, MergeStrategy::SmallerIntoLarger);
        assert!(config.metrics.enable);
    }

    #[test]
    fn parses_sections() {
        let config = Config::from_toml_str(
            r#"
            [graph]
            merge_strategy = "into_first"
            check_invariants = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.graph.merge_strategy, MergeStrategy::IntoFirst);
        assert!(config.graph.check_invariants);
        assert_eq!(config.graph.node_capacity, DEFAULT_NODE_CAPACITY);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn unknown_strategy_fails_to_parse() {
        assert!("biggest".parse::<MergeStrategy>().is_err());
        assert_eq!("into_first".parse::<MergeStrategy>().unwrap(), MergeStrategy::IntoFirst);
    }

    #[test]
    fn from_file_and_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[metrics]\nenable = false").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = load_config_or_default(Some(&path));
        assert!(!config.metrics.enable);

        let missing = load_config_or_default(Some("/definitely/not/here.toml"));
        assert_eq!(missing, Config::default());
    }
}
