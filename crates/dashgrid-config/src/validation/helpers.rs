//! Shared helpers used by the variant validators.

/// Push an error if `value` is not strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: i64) {
    if value <= 0 {
        errors.push(format!("{name} = {value} must be greater than 0"));
    }
}

/// Push an error if `value` is empty or only whitespace.
pub(crate) fn validate_present(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
