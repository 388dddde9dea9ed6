//! Core TOML registry loading: read from path or platform default.

use crate::schema::RegistryConfig;
use crate::validation;
use dashgrid_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load a registry from a specific TOML file path.
///
/// Missing top-level fields fall back to serde defaults. The result is
/// validated; a failure is logged and the parsed config is returned as-is,
/// leaving strict handling to `crate::load_registry`.
pub fn load_from_path(path: &Path) -> Result<RegistryConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: RegistryConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("registry validation warning: {e}");
    }

    info!(
        variants = config.variants.len(),
        "loaded variant registry from {}",
        path.display()
    );
    Ok(config)
}

/// Load the registry from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/dashgrid/variants.toml`
/// On Linux: `~/.config/dashgrid/variants.toml`
///
/// If the file does not exist, writes the commented default template there
/// and returns the built-in variants.
pub fn load_default() -> Result<RegistryConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no registry found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(RegistryConfig::default())
        }
        Err(e) => Err(e),
    }
}
