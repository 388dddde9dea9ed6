//! Grid value type with change tracking.

use std::collections::BTreeSet;
use std::fmt;

use dashgrid_common::{GridId, Widget};
use dashgrid_config::VariantConfig;
use serde::{Deserialize, Serialize};

/// Attributes of a grid that callers may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridField {
    RowCount,
    ColumnCount,
    Widgets,
    Page,
}

impl GridField {
    pub const ALL: [GridField; 4] = [
        GridField::RowCount,
        GridField::ColumnCount,
        GridField::Widgets,
        GridField::Page,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GridField::RowCount => "row_count",
            GridField::ColumnCount => "column_count",
            GridField::Widgets => "widgets",
            GridField::Page => "page",
        }
    }

    /// Property name used in JSON documents.
    pub fn api_name(self) -> &'static str {
        match self {
            GridField::RowCount => "rowCount",
            GridField::ColumnCount => "columnCount",
            GridField::Widgets => "widgets",
            GridField::Page => "page",
        }
    }
}

impl fmt::Display for GridField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard grid.
///
/// Fields are public so a store can rebuild a grid from persisted state.
/// Caller edits go through the `set_*` methods, which record the field as
/// changed; only changed fields are subject to the read-only check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GridId>,
    /// Variant key. `None` is the abstract base grid, which never validates.
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub row_count: Option<i64>,
    #[serde(default)]
    pub column_count: Option<i64>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(skip)]
    changed: BTreeSet<GridField>,
}

impl Grid {
    /// An empty grid of the given variant, without dimensions or widgets.
    pub fn new(variant: Option<String>, page: Option<String>) -> Self {
        Self {
            id: None,
            variant,
            page,
            row_count: None,
            column_count: None,
            widgets: Vec::new(),
            changed: BTreeSet::new(),
        }
    }

    /// A grid laid out like the variant's default layout.
    ///
    /// `page` defaults to the variant's page link, which is only a concrete
    /// link for variants without `{placeholder}` segments.
    pub fn new_default(variant: &VariantConfig, page: Option<String>) -> Self {
        let layout = &variant.default_layout;
        Self {
            id: None,
            variant: Some(variant.key.clone()),
            page: Some(page.unwrap_or_else(|| variant.page.clone())),
            row_count: Some(layout.row_count),
            column_count: Some(layout.column_count),
            widgets: layout.widgets.clone(),
            changed: BTreeSet::new(),
        }
    }

    pub fn set_row_count(&mut self, value: Option<i64>) {
        self.row_count = value;
        self.changed.insert(GridField::RowCount);
    }

    pub fn set_column_count(&mut self, value: Option<i64>) {
        self.column_count = value;
        self.changed.insert(GridField::ColumnCount);
    }

    pub fn set_widgets(&mut self, widgets: Vec<Widget>) {
        self.widgets = widgets;
        self.changed.insert(GridField::Widgets);
    }

    /// Append a widget, marking the widget list as changed.
    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
        self.changed.insert(GridField::Widgets);
    }

    pub fn set_page(&mut self, page: Option<String>) {
        self.page = page;
        self.changed.insert(GridField::Page);
    }

    pub fn changed(&self) -> &BTreeSet<GridField> {
        &self.changed
    }

    pub fn is_changed(&self, field: GridField) -> bool {
        self.changed.contains(&field)
    }

    /// Forget recorded changes, typically after the grid was persisted.
    pub fn clear_changes(&mut self) {
        self.changed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_config::schema::my_page_variant;

    #[test]
    fn new_default_copies_layout() {
        let grid = Grid::new_default(&my_page_variant(), None);
        assert_eq!(grid.variant.as_deref(), Some("my_page"));
        assert_eq!(grid.page.as_deref(), Some("/my/page"));
        assert_eq!(grid.row_count, Some(4));
        assert_eq!(grid.column_count, Some(5));
        assert_eq!(grid.widgets.len(), 4);
        assert!(grid.changed().is_empty());
    }

    #[test]
    fn setters_track_changes() {
        let mut grid = Grid::new(Some("my_page".into()), None);
        grid.set_row_count(Some(3));
        grid.add_widget(Widget::new("news", 1, 2, 1, 2));
        assert!(grid.is_changed(GridField::RowCount));
        assert!(grid.is_changed(GridField::Widgets));
        assert!(!grid.is_changed(GridField::Page));

        grid.clear_changes();
        assert!(grid.changed().is_empty());
        assert_eq!(grid.row_count, Some(3));
    }

    #[test]
    fn field_names() {
        assert_eq!(GridField::RowCount.as_str(), "row_count");
        assert_eq!(GridField::RowCount.api_name(), "rowCount");
        assert_eq!(GridField::ColumnCount.api_name(), "columnCount");
        assert_eq!(GridField::Page.to_string(), "page");
    }

    #[test]
    fn grid_from_json_has_no_changes() {
        let grid: Grid = serde_json::from_str(
            r#"{"variant":"my_page","rowCount":6,"columnCount":7,
                "widgets":[{"identifier":"news","startRow":1,"endRow":2,"startColumn":1,"endColumn":2}]}"#,
        )
        .unwrap();
        assert_eq!(grid.row_count, Some(6));
        assert_eq!(grid.widgets.len(), 1);
        assert!(grid.page.is_none());
        assert!(grid.changed().is_empty());
    }
}
