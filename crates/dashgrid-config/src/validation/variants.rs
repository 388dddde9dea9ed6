//! Per-variant validation (keys, pages, allowed widgets, default layouts).

use std::collections::HashMap;

use dashgrid_common::{geometry, CellSpan};

use crate::schema::{RegistryConfig, VariantConfig};

use super::helpers::{validate_positive, validate_present};

/// Report keys or page templates used by more than one variant.
pub(crate) fn validate_uniqueness(errors: &mut Vec<String>, config: &RegistryConfig) {
    let mut keys: HashMap<&str, usize> = HashMap::new();
    let mut pages: HashMap<&str, usize> = HashMap::new();

    for (index, variant) in config.variants.iter().enumerate() {
        if let Some(first) = keys.get(variant.key.as_str()) {
            errors.push(format!(
                "duplicate variant key '{}': used by variants[{first}] and variants[{index}]",
                variant.key
            ));
        } else {
            keys.insert(&variant.key, index);
        }

        if let Some(first) = pages.get(variant.page.as_str()) {
            errors.push(format!(
                "duplicate page '{}': used by variants[{first}] and variants[{index}]",
                variant.page
            ));
        } else {
            pages.insert(&variant.page, index);
        }
    }
}

/// Validate a single variant, including the placement of its default
/// widgets: a default layout must itself be a valid grid.
pub(crate) fn validate_variant(errors: &mut Vec<String>, index: usize, variant: &VariantConfig) {
    let prefix = format!("variants[{index}]");

    validate_present(errors, &format!("{prefix}.key"), &variant.key);
    if !variant.page.starts_with('/') {
        errors.push(format!(
            "{prefix}.page = '{}' must start with '/'",
            variant.page
        ));
    }

    if variant.allowed_widgets.is_empty() {
        errors.push(format!("{prefix}.allowed_widgets must not be empty"));
    }
    for (i, identifier) in variant.allowed_widgets.iter().enumerate() {
        validate_present(errors, &format!("{prefix}.allowed_widgets[{i}]"), identifier);
    }

    let layout = &variant.default_layout;
    validate_positive(errors, &format!("{prefix}.default_layout.row_count"), layout.row_count);
    validate_positive(
        errors,
        &format!("{prefix}.default_layout.column_count"),
        layout.column_count,
    );
    validate_default_widgets(errors, &prefix, variant);
}

fn validate_default_widgets(errors: &mut Vec<String>, prefix: &str, variant: &VariantConfig) {
    let layout = &variant.default_layout;
    let bound = |count: i64| (count > 0).then_some(count);
    let (rows, columns) = (bound(layout.row_count), bound(layout.column_count));

    let mut placed: Vec<(usize, CellSpan)> = Vec::with_capacity(layout.widgets.len());
    for (i, widget) in layout.widgets.iter().enumerate() {
        let name = format!("{prefix}.default_layout.widgets[{i}]");
        if !variant.allows(&widget.identifier) {
            errors.push(format!(
                "{name}.identifier = '{}' is not an allowed widget",
                widget.identifier
            ));
        }

        let span = widget.span();
        if geometry::is_reversed(&span) {
            errors.push(format!("{name} ends before it starts"));
        } else if geometry::is_outside(&span, rows, columns) {
            errors.push(format!(
                "{name} is outside the {}x{} default grid",
                layout.row_count, layout.column_count
            ));
        } else {
            placed.push((i, span));
        }
    }

    for (n, (a, span_a)) in placed.iter().enumerate() {
        for (b, span_b) in &placed[n + 1..] {
            if geometry::overlaps(span_a, span_b) {
                errors.push(format!(
                    "{prefix}.default_layout.widgets[{a}] overlaps widgets[{b}]"
                ));
            }
        }
    }
}
