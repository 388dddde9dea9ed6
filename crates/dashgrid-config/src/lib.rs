//! dashgrid variant registry.
//!
//! Each grid belongs to a variant (the personal "my page" dashboard, a
//! project overview, ...). A variant fixes the page link of its grids, the
//! widget identifiers they may contain and the layout new grids start from.
//! Variants are read from a TOML file; the built-in set is used when none
//! is configured.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dashgrid_config::load_registry;
//!
//! let registry = load_registry(None).expect("failed to load registry");
//! let my_page = registry.get("my_page").expect("built-in variant");
//! assert!(my_page.allows("work_packages_assigned"));
//! ```

pub mod registry;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use registry::VariantRegistry;
pub use schema::{DefaultLayout, RegistryConfig, VariantConfig, CONFIG_SCHEMA_VERSION};

use dashgrid_common::ConfigError;
use std::path::Path;

/// Load and validate the variant registry.
///
/// Reads `path` when given, otherwise the platform default location
/// (creating it with the built-in variants if missing). Unlike
/// `toml_loader::load_from_path`, an invalid registry is an error here.
pub fn load_registry(path: Option<&Path>) -> Result<VariantRegistry, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(VariantRegistry::from_config(&config))
}

/// Serialize a registry config to a pretty-printed JSON string.
pub fn registry_to_json(config: &RegistryConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize registry: {e}\"}}"))
}
