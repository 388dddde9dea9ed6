//! Parsing of posted grid changes.

use dashgrid_common::Widget;
use dashgrid_layout::Grid;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FormError;

/// Changes posted to a grid form or update request.
///
/// A key that is absent leaves the field alone; an explicit `null` clears
/// it. Unknown keys (`_type`, `id`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPatch {
    #[serde(default, deserialize_with = "present")]
    pub row_count: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub column_count: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub widgets: Option<Option<Vec<Widget>>>,
    #[serde(default, rename = "_links")]
    pub links: Option<PatchLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatchLinks {
    #[serde(default, deserialize_with = "present")]
    pub page: Option<Option<LinkParams>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkParams {
    #[serde(default)]
    pub href: Option<String>,
}

/// Distinguishes a key given as `null` (`Some(None)`) from a missing key
/// (`None`, via `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl GridPatch {
    pub fn from_json(params: &Value) -> Result<Self, FormError> {
        if params.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(params).map_err(|e| FormError::Params(e.to_string()))
    }

    /// Assign every posted field to `grid`, marking it as changed.
    pub fn apply(self, grid: &mut Grid) {
        if let Some(row_count) = self.row_count {
            grid.set_row_count(row_count);
        }
        if let Some(column_count) = self.column_count {
            grid.set_column_count(column_count);
        }
        if let Some(widgets) = self.widgets {
            grid.set_widgets(widgets.unwrap_or_default());
        }
        if let Some(page) = self.links.and_then(|links| links.page) {
            grid.set_page(page.and_then(|link| link.href));
        }
    }
}
