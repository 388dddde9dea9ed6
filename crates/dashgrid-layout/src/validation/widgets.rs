//! Widget checks: identifiers, bounds and pairwise collisions.

use dashgrid_common::Widget;
use dashgrid_config::VariantConfig;

use crate::geometry;
use crate::grid::GridField;

use super::result::{ErrorCode, ErrorDetail, ErrorSet};

/// Check each widget on its own, then every pair of well-placed widgets.
///
/// A reversed span is reported as `end_before_start` only, never also as
/// `outside`. Widgets failing either geometric check take no part in the
/// collision pass. Without a resolved variant identifiers are not checked;
/// the missing variant is already reported on `page`.
pub(crate) fn check_widgets(
    errors: &mut ErrorSet,
    widgets: &[Widget],
    variant: Option<&VariantConfig>,
    row_count: Option<i64>,
    column_count: Option<i64>,
) {
    let mut placed: Vec<usize> = Vec::with_capacity(widgets.len());

    for (index, widget) in widgets.iter().enumerate() {
        if let Some(variant) = variant {
            if !variant.allows(&widget.identifier) {
                errors.add(
                    GridField::Widgets,
                    ErrorDetail::new(ErrorCode::Inclusion).for_widget(index),
                );
            }
        }

        let span = widget.span();
        if geometry::is_reversed(&span) {
            errors.add(
                GridField::Widgets,
                ErrorDetail::new(ErrorCode::EndBeforeStart).for_widget(index),
            );
        } else if geometry::is_outside(&span, row_count, column_count) {
            errors.add(
                GridField::Widgets,
                ErrorDetail::new(ErrorCode::Outside).for_widget(index),
            );
        } else {
            placed.push(index);
        }
    }

    check_collisions(errors, widgets, &placed);
}

/// Every colliding pair adds one `overlaps` entry for each of its widgets.
fn check_collisions(errors: &mut ErrorSet, widgets: &[Widget], placed: &[usize]) {
    for (n, &a) in placed.iter().enumerate() {
        for &b in &placed[n + 1..] {
            if geometry::overlaps(&widgets[a].span(), &widgets[b].span()) {
                errors.add(
                    GridField::Widgets,
                    ErrorDetail::new(ErrorCode::Overlaps).for_widget(a).against(b),
                );
                errors.add(
                    GridField::Widgets,
                    ErrorDetail::new(ErrorCode::Overlaps).for_widget(b).against(a),
                );
            }
        }
    }
}
