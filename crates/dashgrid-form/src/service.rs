//! Form and update operations over a grid store.

use dashgrid_common::GridId;
use dashgrid_config::VariantRegistry;
use dashgrid_layout::{validate, Grid, GridField, ValidationResult, WritableFields};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::FormError;
use crate::form::Form;
use crate::patch::GridPatch;
use crate::store::GridStore;

pub struct GridForms<S: GridStore> {
    store: S,
    registry: VariantRegistry,
}

impl<S: GridStore> GridForms<S> {
    pub fn new(store: S, registry: VariantRegistry) -> Self {
        Self { store, registry }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    /// Describe what updating grid `id` with `params` would produce,
    /// without persisting anything.
    pub fn update_form(
        &self,
        id: GridId,
        params: &Value,
        writable: &WritableFields,
    ) -> Result<Form, FormError> {
        let stored = self.store.load(id)?;
        let (grid, result) = self.apply(stored.clone(), params, writable)?;
        let shown = without_rejected(&stored, grid, writable);

        debug!(grid = %id, valid = result.is_valid(), "rendered grid form");
        Ok(Form::render(id, &shown, &result, writable))
    }

    /// Apply `params` to grid `id` and persist it when the result is valid.
    pub fn update(
        &mut self,
        id: GridId,
        params: &Value,
        writable: &WritableFields,
    ) -> Result<Grid, FormError> {
        let stored = self.store.load(id)?;
        let (mut grid, result) = self.apply(stored, params, writable)?;
        if !result.is_valid() {
            warn!(grid = %id, errors = result.error_count(), "rejected grid update");
            return Err(FormError::Invalid(result));
        }
        self.store.save(&mut grid)?;
        info!(grid = %id, "updated grid");
        Ok(grid)
    }

    /// Persist a new grid laid out like the default of `variant_key`. The
    /// grid is validated like any other before it is saved.
    pub fn create_default(
        &mut self,
        variant_key: &str,
        page: Option<String>,
    ) -> Result<Grid, FormError> {
        let variant = self
            .registry
            .get(variant_key)
            .ok_or_else(|| FormError::UnknownVariant(variant_key.to_string()))?;
        let mut grid = Grid::new_default(variant, page);
        let result = validate(&grid, &WritableFields::all(), &self.registry);
        if !result.is_valid() {
            warn!(variant = variant_key, errors = result.error_count(), "rejected default grid");
            return Err(FormError::Invalid(result));
        }
        let id = self.store.save(&mut grid)?;
        info!(grid = %id, variant = variant_key, "created default grid");
        Ok(grid)
    }

    fn apply(
        &self,
        mut grid: Grid,
        params: &Value,
        writable: &WritableFields,
    ) -> Result<(Grid, ValidationResult), FormError> {
        GridPatch::from_json(params)?.apply(&mut grid);
        let result = validate(&grid, writable, &self.registry);
        Ok((grid, result))
    }
}

/// `grid` with every field the caller was not allowed to write reset to
/// its stored value.
fn without_rejected(stored: &Grid, mut grid: Grid, writable: &WritableFields) -> Grid {
    for field in GridField::ALL {
        if writable.contains(field) || !grid.is_changed(field) {
            continue;
        }
        match field {
            GridField::RowCount => grid.row_count = stored.row_count,
            GridField::ColumnCount => grid.column_count = stored.column_count,
            GridField::Widgets => grid.widgets = stored.widgets.clone(),
            GridField::Page => grid.page = stored.page.clone(),
        }
    }
    grid
}
