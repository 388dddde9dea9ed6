use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rectangle of grid cells. Start bounds are inclusive, end bounds exclusive,
/// all 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSpan {
    pub start_row: i64,
    pub end_row: i64,
    pub start_column: i64,
    pub end_column: i64,
}

/// A widget placed on a grid.
///
/// Serialized with camelCase keys (`startRow`, `endColumn`, ...). The
/// snake_case spellings are accepted on input so TOML files can use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub identifier: String,
    #[serde(alias = "start_row")]
    pub start_row: i64,
    #[serde(alias = "end_row")]
    pub end_row: i64,
    #[serde(alias = "start_column")]
    pub start_column: i64,
    #[serde(alias = "end_column")]
    pub end_column: i64,
    /// Widget specific settings, passed through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl Widget {
    pub fn new(
        identifier: impl Into<String>,
        start_row: i64,
        end_row: i64,
        start_column: i64,
        end_column: i64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            start_row,
            end_row,
            start_column,
            end_column,
            options: Map::new(),
        }
    }

    pub fn span(&self) -> CellSpan {
        CellSpan {
            start_row: self.start_row,
            end_row: self.end_row,
            start_column: self.start_column,
            end_column: self.end_column,
        }
    }
}
