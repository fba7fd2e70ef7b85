//! Configuration management for NetworkBook.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level or `EnvFilter` directive (default: "warn")
    pub log_level: String,

    /// Maximum number of results a find returns (default: 10)
    pub max_find_results: usize,

    /// Minimum confidence for fuzzy name matches, 0-100 (default: 30)
    pub find_confidence_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `NETWORKBOOK_MAX_FIND_RESULTS`: Max find results (default: 10)
    /// - `NETWORKBOOK_FIND_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_find_results =
            Self::parse_env_usize("NETWORKBOOK_MAX_FIND_RESULTS", defaults.max_find_results)?;
        if max_find_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "NETWORKBOOK_MAX_FIND_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let find_confidence_threshold = Self::parse_env_u8(
            "NETWORKBOOK_FIND_CONFIDENCE_THRESHOLD",
            defaults.find_confidence_threshold,
        )?;
        if find_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "NETWORKBOOK_FIND_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        Ok(Config {
            log_level,
            max_find_results,
            find_confidence_threshold,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            max_find_results: 10,
            find_confidence_threshold: 30,
        }
    }
}
