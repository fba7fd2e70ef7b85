//! Tracing setup.
//!
//! Logs go to stderr so they never mix with output meant for the user.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` if set, otherwise the configured level.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the configured level is not a
/// valid filter directive.
pub fn build_filter(config: &Config) -> ConfigResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidValue {
        var: "LOG_LEVEL".to_string(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(config: &Config) -> ConfigResult<()> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(format!("Failed to initialise logging: {}", e)))
}
