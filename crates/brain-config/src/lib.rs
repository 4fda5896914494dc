//! Project Brain client configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use brain_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BackendConfig, BrainConfig, DisplayConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use brain_common::ConfigError;
use std::path::Path;

/// Environment variable that overrides `backend.url`.
pub const BACKEND_URL_ENV: &str = "BRAIN_BACKEND_URL";

/// Load config from the platform default path, apply environment
/// overrides, and validate the result.
pub fn load_config() -> Result<BrainConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Same as [`load_config`] but reads an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<BrainConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut BrainConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(BACKEND_URL_ENV).filter(|u| !u.trim().is_empty()) {
        tracing::info!("backend url overridden by {BACKEND_URL_ENV}");
        config.backend.url = url;
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BrainConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
