//! Dashboard grid layouts and their validation.
//!
//! A [`Grid`] has a row and column count and holds rectangular [`Widget`]s.
//! [`validate`] checks a candidate grid against the variant registry and
//! reports every problem it finds, keyed by field.

pub mod grid;
pub mod validation;
pub mod writable;

pub use dashgrid_common::{geometry, CellSpan, Widget};
pub use grid::{Grid, GridField};
pub use validation::{validate, ErrorCode, ErrorDetail, ValidationResult};
pub use writable::WritableFields;
