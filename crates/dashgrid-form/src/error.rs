use dashgrid_common::{DashgridError, StoreError};
use dashgrid_layout::ValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("invalid parameters: {0}")]
    Params(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown grid variant: {0}")]
    UnknownVariant(String),

    #[error("grid is invalid ({} errors)", .0.error_count())]
    Invalid(ValidationResult),
}

impl From<FormError> for DashgridError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Params(msg) => DashgridError::Params(msg),
            FormError::Store(e) => DashgridError::Store(e),
            other => DashgridError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_common::GridId;

    #[test]
    fn form_error_display() {
        let err = FormError::Params("rowCount: invalid type".into());
        assert_eq!(err.to_string(), "invalid parameters: rowCount: invalid type");

        let err = FormError::UnknownVariant("grid".into());
        assert_eq!(err.to_string(), "unknown grid variant: grid");

        let err = FormError::Invalid(ValidationResult::default());
        assert_eq!(err.to_string(), "grid is invalid (0 errors)");
    }

    #[test]
    fn form_error_from_store() {
        let err: FormError = StoreError::NotFound(GridId(9)).into();
        assert!(matches!(err, FormError::Store(StoreError::NotFound(GridId(9)))));
        assert_eq!(err.to_string(), "grid not found: 9");
    }

    #[test]
    fn form_error_into_dashgrid_error() {
        let err: DashgridError = FormError::Params("bad".into()).into();
        assert!(matches!(err, DashgridError::Params(ref m) if m == "bad"));

        let err: DashgridError = FormError::Store(StoreError::NotFound(GridId(3))).into();
        assert!(matches!(err, DashgridError::Store(StoreError::NotFound(GridId(3)))));

        let err: DashgridError = FormError::UnknownVariant("x".into()).into();
        assert_eq!(err.to_string(), "unknown grid variant: x");
    }
}
