//! Variant registry schema types.
//!
//! `RegistryConfig` uses `serde(default)`, so an empty file yields the
//! built-in variants. Supplying `[[variants]]` replaces the built-ins
//! entirely rather than merging with them.

mod defaults;
mod variant;

pub use defaults::{my_page_variant, project_overview_variant};
pub use variant::*;

use serde::{Deserialize, Serialize};

/// Current registry schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root of the variant registry file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub schema_version: u32,
    pub variants: Vec<VariantConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            variants: vec![my_page_variant(), project_overview_variant()],
        }
    }
}
