//! Subcommand handlers. Each returns the JSON to print and whether the
//! grid it looked at was valid.

use std::collections::BTreeMap;
use std::path::Path;

use dashgrid_common::{DashgridError, GridId};
use dashgrid_config::{toml_loader, VariantRegistry};
use dashgrid_form::{GridForms, GridPayload, GridStore, MemoryStore};
use dashgrid_layout::{validate, Grid, WritableFields};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn json(value: &impl Serialize, success: bool) -> Result<Self, DashgridError> {
        let output = serde_json::to_string_pretty(value)
            .map_err(|e| DashgridError::Other(format!("failed to serialize output: {e}")))?;
        Ok(Self { output, success })
    }
}

/// Load the registry from `path`, or from the default location falling
/// back to the built-in variants.
pub fn registry(path: Option<&Path>) -> Result<VariantRegistry, DashgridError> {
    match path {
        Some(path) => {
            info!("Using registry override: {}", path.display());
            Ok(dashgrid_config::load_registry(Some(path))?)
        }
        None => Ok(dashgrid_config::load_registry(None).unwrap_or_else(|e| {
            warn!("Registry load failed, using built-in variants: {e}");
            VariantRegistry::default()
        })),
    }
}

fn read_json(path: &Path) -> Result<Value, DashgridError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| DashgridError::Params(format!("{}: {e}", path.display())))
}

fn read_grid(path: &Path) -> Result<Grid, DashgridError> {
    serde_json::from_value(read_json(path)?)
        .map_err(|e| DashgridError::Params(format!("{}: {e}", path.display())))
}

pub fn validate_file(file: &Path, registry: &VariantRegistry) -> Result<Outcome, DashgridError> {
    let grid = read_grid(file)?;
    let result = validate(&grid, &WritableFields::all(), registry);
    Outcome::json(&result, result.is_valid())
}

pub fn form(
    file: &Path,
    params: Option<&Path>,
    page_writable: bool,
    registry: VariantRegistry,
) -> Result<Outcome, DashgridError> {
    let mut grid = read_grid(file)?;
    let params = match params {
        Some(path) => read_json(path)?,
        None => Value::Object(Default::default()),
    };
    let writable = if page_writable {
        WritableFields::all()
    } else {
        WritableFields::layout_only()
    };

    let mut store = MemoryStore::new();
    let id: GridId = store.save(&mut grid)?;
    let forms = GridForms::new(store, registry);
    let form = forms.update_form(id, &params, &writable)?;
    Outcome::json(&form, !form.has_errors())
}

pub fn defaults(variant: Option<&str>, registry: &VariantRegistry) -> Result<Outcome, DashgridError> {
    let mut payloads = BTreeMap::new();
    match variant {
        Some(key) => {
            let config = registry
                .get(key)
                .ok_or_else(|| DashgridError::Params(format!("unknown grid variant: {key}")))?;
            payloads.insert(key.to_string(), payload(config));
        }
        None => {
            for config in registry.variants() {
                payloads.insert(config.key.clone(), payload(config));
            }
        }
    }
    Outcome::json(&payloads, true)
}

fn payload(config: &dashgrid_config::VariantConfig) -> GridPayload {
    GridPayload::from_grid(&Grid::new_default(config, None))
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<Outcome, DashgridError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_loader::default_config_path()?,
    };
    if path.exists() && !force {
        return Err(DashgridError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    toml_loader::create_default_config(&path)?;
    Ok(Outcome {
        output: path.display().to_string(),
        success: true,
    })
}
