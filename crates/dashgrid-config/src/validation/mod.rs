//! Variant registry validation.
//!
//! Checks key and page uniqueness, allowed widget sets and the default
//! layout of every variant. All problems are collected into a single
//! `ConfigError`.

mod helpers;
mod variants;

#[cfg(test)]
mod tests;

use crate::schema::RegistryConfig;
use dashgrid_common::ConfigError;

/// Run all validations on a registry config, collecting all errors.
pub fn validate(config: &RegistryConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.variants.is_empty() {
        errors.push("variants must not be empty".into());
    }

    variants::validate_uniqueness(&mut errors, config);
    for (index, variant) in config.variants.iter().enumerate() {
        variants::validate_variant(&mut errors, index, variant);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
