//! Human readable validation messages.

use dashgrid_layout::{ErrorCode, ErrorDetail, GridField};

pub fn field_name(field: GridField) -> &'static str {
    match field {
        GridField::RowCount => "Row count",
        GridField::ColumnCount => "Column count",
        GridField::Widgets => "Widgets",
        GridField::Page => "Page",
    }
}

pub fn message(field: GridField, detail: &ErrorDetail) -> String {
    let name = field_name(field);
    match detail.error {
        ErrorCode::Blank => format!("{name} can't be blank."),
        ErrorCode::GreaterThan => {
            format!("{name} must be greater than {}.", detail.count.unwrap_or(0))
        }
        ErrorCode::Inclusion => format!("{name} is not set to one of the allowed values."),
        ErrorCode::Overlaps => format!("{name} overlap."),
        ErrorCode::Outside => format!("{name} is outside of the grid."),
        ErrorCode::EndBeforeStart => {
            format!("{name} end value needs to be larger than the start value.")
        }
        ErrorCode::Readonly => "You must not write a read-only attribute.".to_string(),
    }
}
