//! Grid variant configuration types.

use dashgrid_common::Widget;
use serde::{Deserialize, Serialize};

/// A concrete grid variant, such as the personal "my page" dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Stable key stored with each grid (e.g. `my_page`).
    pub key: String,
    /// Page link the grid is attached to. `{name}` segments match any
    /// single path segment, e.g. `/projects/{project}`.
    pub page: String,
    /// Widget identifiers that may be placed on this variant.
    #[serde(default)]
    pub allowed_widgets: Vec<String>,
    /// Layout used when a new grid of this variant is created.
    #[serde(default)]
    pub default_layout: DefaultLayout,
}

impl VariantConfig {
    pub fn allows(&self, identifier: &str) -> bool {
        self.allowed_widgets.iter().any(|w| w == identifier)
    }
}

/// Initial dimensions and widgets of a freshly created grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultLayout {
    pub row_count: i64,
    pub column_count: i64,
    pub widgets: Vec<Widget>,
}

impl Default for DefaultLayout {
    fn default() -> Self {
        Self {
            row_count: 4,
            column_count: 5,
            widgets: Vec::new(),
        }
    }
}
