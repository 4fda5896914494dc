//! Core TOML config loading: read from path or platform default.

use crate::schema::BrainConfig;
use crate::validation;
use brain_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. A config that parses but
/// fails validation is logged and returned as-is; callers that need a
/// valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<BrainConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: BrainConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/project-brain/config.toml`
/// On Linux: `~/.config/project-brain/config.toml`
///
/// If the file does not exist, writes the commented template and returns
/// defaults. When there is no config directory, defaults are returned.
pub fn load_default() -> Result<BrainConfig, ConfigError> {
    match default_config_path() {
        Ok(path) => load_or_create(&path),
        Err(e) => {
            warn!("{e}, using default config");
            Ok(BrainConfig::default())
        }
    }
}

/// Load config from `path`, writing the template there if it is missing.
///
/// Failing to write the template is not an error: the defaults it would
/// hold are returned either way.
pub fn load_or_create(path: &Path) -> Result<BrainConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(path) {
                warn!("{e}, using default config");
            }
            Ok(BrainConfig::default())
        }
        Err(e) => Err(e),
    }
}
