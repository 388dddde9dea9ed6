//! Structured validation outcome.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GridField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Blank,
    GreaterThan,
    Inclusion,
    Overlaps,
    Outside,
    EndBeforeStart,
    Readonly,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Blank => "blank",
            ErrorCode::GreaterThan => "greater_than",
            ErrorCode::Inclusion => "inclusion",
            ErrorCode::Overlaps => "overlaps",
            ErrorCode::Outside => "outside",
            ErrorCode::EndBeforeStart => "end_before_start",
            ErrorCode::Readonly => "readonly",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem.
///
/// `count` is the threshold of a `greater_than` error. `widget` is the index
/// of the offending widget, and `other` the index of the widget it collides
/// with for `overlaps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub error: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<usize>,
}

impl ErrorDetail {
    pub fn new(error: ErrorCode) -> Self {
        Self {
            error,
            count: None,
            widget: None,
            other: None,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn for_widget(mut self, index: usize) -> Self {
        self.widget = Some(index);
        self
    }

    pub fn against(mut self, index: usize) -> Self {
        self.other = Some(index);
        self
    }
}

/// Errors collected while validating a grid, keyed by field.
///
/// Only built by the validator, so `valid` always agrees with the errors.
/// Serialized for output; never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors_by_field: BTreeMap<GridField, Vec<ErrorDetail>>,
}

impl ValidationResult {
    pub(crate) fn from_errors(errors_by_field: BTreeMap<GridField, Vec<ErrorDetail>>) -> Self {
        Self {
            valid: errors_by_field.is_empty(),
            errors_by_field,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Errors reported for `field`, in the order they were found.
    pub fn errors(&self, field: GridField) -> &[ErrorDetail] {
        self.errors_by_field
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Just the error codes for `field`.
    pub fn codes(&self, field: GridField) -> Vec<ErrorCode> {
        self.errors(field).iter().map(|d| d.error).collect()
    }

    pub fn has_error(&self, field: GridField, code: ErrorCode) -> bool {
        self.errors(field).iter().any(|d| d.error == code)
    }

    /// Fields with errors and their details, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (GridField, &[ErrorDetail])> {
        self.errors_by_field
            .iter()
            .map(|(field, details)| (*field, details.as_slice()))
    }

    pub fn error_count(&self) -> usize {
        self.errors_by_field.values().map(Vec::len).sum()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_errors(BTreeMap::new())
    }
}

/// Accumulator used by the individual checks.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet(BTreeMap<GridField, Vec<ErrorDetail>>);

impl ErrorSet {
    pub(crate) fn add(&mut self, field: GridField, detail: ErrorDetail) {
        self.0.entry(field).or_default().push(detail);
    }

    pub(crate) fn into_result(self) -> ValidationResult {
        ValidationResult::from_errors(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let result = ErrorSet::default().into_result();
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
        assert!(result.errors(GridField::Widgets).is_empty());
        assert_eq!(result, ValidationResult::default());
    }

    #[test]
    fn errors_are_grouped_by_field() {
        let mut set = ErrorSet::default();
        set.add(GridField::Widgets, ErrorDetail::new(ErrorCode::Outside).for_widget(0));
        set.add(GridField::RowCount, ErrorDetail::new(ErrorCode::Blank));
        set.add(GridField::Widgets, ErrorDetail::new(ErrorCode::Inclusion).for_widget(1));
        let result = set.into_result();

        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 3);
        assert_eq!(
            result.codes(GridField::Widgets),
            vec![ErrorCode::Outside, ErrorCode::Inclusion]
        );
        let fields: Vec<GridField> = result.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![GridField::RowCount, GridField::Widgets]);
    }

    #[test]
    fn serializes_like_error_details() {
        let mut set = ErrorSet::default();
        set.add(
            GridField::RowCount,
            ErrorDetail::new(ErrorCode::GreaterThan).with_count(0),
        );
        set.add(
            GridField::Widgets,
            ErrorDetail::new(ErrorCode::Overlaps).for_widget(0).against(1),
        );
        let json = serde_json::to_value(set.into_result()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors_by_field": {
                    "row_count": [{ "error": "greater_than", "count": 0 }],
                    "widgets": [{ "error": "overlaps", "widget": 0, "other": 1 }]
                }
            })
        );
    }

    #[test]
    fn valid_flag_follows_errors() {
        let json = serde_json::to_value(ValidationResult::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true, "errors_by_field": {} }));

        let mut set = ErrorSet::default();
        set.add(GridField::Page, ErrorDetail::new(ErrorCode::Inclusion));
        let result = set.into_result();
        assert!(!result.is_valid());
        assert_eq!(serde_json::to_value(&result).unwrap()["valid"], false);
    }

    #[test]
    fn error_code_display() {
        assert_eq!(ErrorCode::EndBeforeStart.to_string(), "end_before_start");
        assert_eq!(ErrorCode::Readonly.as_str(), "readonly");
    }
}
