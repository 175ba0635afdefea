//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game engine.
///
/// ```toml
/// # Fixes the opponent's random fallback; omit for a fresh seed each run.
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the opponent's random fallback.
    #[serde(default)]
    seed: Option<u64>,
}

impl EngineConfig {
    /// Creates a configuration with the given seed.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Replaces the seed.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(seed = ?config.seed, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_toml() {
        let config = EngineConfig::from_toml_str("seed = 42").expect("valid toml");
        assert_eq!(config.seed(), &Some(42));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").expect("valid toml");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = EngineConfig::from_toml_str("seed = \"many\"").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let err = EngineConfig::from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
