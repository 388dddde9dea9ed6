//! Scalar field checks: read-only assignments, dimensions, variant.

use std::collections::BTreeSet;

use dashgrid_config::registry::page_matches;
use dashgrid_config::{VariantConfig, VariantRegistry};

use crate::grid::{Grid, GridField};
use crate::writable::WritableFields;

use super::result::{ErrorCode, ErrorDetail, ErrorSet};

/// Flag every changed field the context may not write. Returns the rejected
/// fields so their values are not validated further.
pub(crate) fn check_readonly(
    errors: &mut ErrorSet,
    grid: &Grid,
    writable: &WritableFields,
) -> BTreeSet<GridField> {
    let rejected: BTreeSet<GridField> = grid
        .changed()
        .iter()
        .copied()
        .filter(|field| !writable.contains(*field))
        .collect();
    for field in &rejected {
        errors.add(*field, ErrorDetail::new(ErrorCode::Readonly));
    }
    rejected
}

/// A dimension must be present and at least 1.
pub(crate) fn check_dimension(errors: &mut ErrorSet, field: GridField, value: Option<i64>) {
    match value {
        None => errors.add(field, ErrorDetail::new(ErrorCode::Blank)),
        Some(n) if n <= 0 => errors.add(field, ErrorDetail::new(ErrorCode::GreaterThan).with_count(0)),
        Some(_) => {}
    }
}

/// Find the variant the grid belongs to.
///
/// A writable, freshly assigned page link decides the variant. Otherwise the
/// stored variant key does, and the stored page link must match that
/// variant's page template; a grid without a key is resolved by its page.
/// Failure is reported on `page` unless the page assignment was already
/// rejected as read-only.
pub(crate) fn resolve_variant<'r>(
    errors: &mut ErrorSet,
    grid: &Grid,
    registry: &'r VariantRegistry,
    rejected: &BTreeSet<GridField>,
) -> Option<&'r VariantConfig> {
    let page_rejected = rejected.contains(&GridField::Page);
    let page_assigned = grid.is_changed(GridField::Page) && !page_rejected;
    let by_page = || grid.page.as_deref().and_then(|href| registry.resolve_page(href));

    let (variant, page_resolves) = if page_assigned {
        let variant = by_page();
        (variant, variant.is_some())
    } else {
        match grid.variant.as_deref() {
            Some(key) => {
                let variant = registry.get(key);
                // A rejected assignment left the requested link in `page`;
                // only `readonly` is reported for it.
                let page_resolves = page_rejected
                    || match (variant, grid.page.as_deref()) {
                        (Some(variant), Some(href)) => page_matches(&variant.page, href),
                        (Some(_), None) => true,
                        (None, _) => false,
                    };
                (variant, page_resolves)
            }
            None if page_rejected => (None, true),
            None => {
                let variant = by_page();
                (variant, variant.is_some())
            }
        }
    };

    if !page_resolves || (variant.is_none() && !page_rejected) {
        errors.add(GridField::Page, ErrorDetail::new(ErrorCode::Inclusion));
    }
    variant
}
