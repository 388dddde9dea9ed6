//! Grid layout validation.
//!
//! Runs the field, variant and widget checks independently and merges
//! everything they find into one `ValidationResult`. Invalid layouts are
//! data, not errors: `validate` never fails.

mod fields;
mod result;
mod widgets;


pub use result::{ErrorCode, ErrorDetail, ValidationResult};

use dashgrid_config::VariantRegistry;
use tracing::debug;

use crate::grid::{Grid, GridField};
use crate::writable::WritableFields;
use result::ErrorSet;

/// Validate `grid` for a context allowed to write `writable`.
pub fn validate(grid: &Grid, writable: &WritableFields, registry: &VariantRegistry) -> ValidationResult {
    let mut errors = ErrorSet::default();

    let rejected = fields::check_readonly(&mut errors, grid, writable);

    if !rejected.contains(&GridField::RowCount) {
        fields::check_dimension(&mut errors, GridField::RowCount, grid.row_count);
    }
    if !rejected.contains(&GridField::ColumnCount) {
        fields::check_dimension(&mut errors, GridField::ColumnCount, grid.column_count);
    }

    let variant = fields::resolve_variant(&mut errors, grid, registry, &rejected);

    if !rejected.contains(&GridField::Widgets) {
        widgets::check_widgets(
            &mut errors,
            &grid.widgets,
            variant,
            grid.row_count.filter(|n| *n > 0),
            grid.column_count.filter(|n| *n > 0),
        );
    }

    let result = errors.into_result();
    debug!(
        grid = ?grid.id,
        variant = ?variant.map(|v| v.key.as_str()),
        widgets = grid.widgets.len(),
        valid = result.is_valid(),
        errors = result.error_count(),
        "validated grid layout"
    );
    result
}
