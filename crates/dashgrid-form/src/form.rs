//! The `Form` document describing a proposed grid change.

use std::collections::BTreeMap;

use dashgrid_common::{GridId, Widget};
use dashgrid_layout::{ErrorDetail, Grid, GridField, ValidationResult, WritableFields};
use serde::Serialize;

use crate::messages;
use crate::paths;

const PROPERTY_CONSTRAINT_VIOLATION: &str =
    "urn:openproject-org:api:v3:errors:PropertyConstraintViolation";
const MULTIPLE_ERRORS: &str = "urn:openproject-org:api:v3:errors:MultipleErrors";

#[derive(Debug, Clone, Serialize)]
pub struct Form {
    #[serde(rename = "_type")]
    kind: &'static str,
    #[serde(rename = "_embedded")]
    embedded: FormEmbedded,
    #[serde(rename = "_links")]
    links: FormLinks,
}

#[derive(Debug, Clone, Serialize)]
struct FormEmbedded {
    payload: GridPayload,
    schema: GridSchema,
    #[serde(rename = "validationErrors")]
    validation_errors: BTreeMap<&'static str, ErrorResource>,
}

#[derive(Debug, Clone, Serialize)]
struct FormLinks {
    #[serde(rename = "self")]
    this: Link,
    validate: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
struct Link {
    href: String,
    method: &'static str,
}

impl Link {
    fn new(href: String, method: &'static str) -> Self {
        Self { href, method }
    }
}

/// Grid state in the shape accepted by form and update requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPayload {
    row_count: Option<i64>,
    column_count: Option<i64>,
    widgets: Vec<WidgetPayload>,
    #[serde(rename = "_links")]
    links: PayloadLinks,
}

#[derive(Debug, Clone, Serialize)]
struct WidgetPayload {
    #[serde(rename = "_type")]
    kind: &'static str,
    #[serde(flatten)]
    widget: Widget,
}

#[derive(Debug, Clone, Serialize)]
struct PayloadLinks {
    page: PageLink,
}

#[derive(Debug, Clone, Serialize)]
struct PageLink {
    href: Option<String>,
    #[serde(rename = "type")]
    media_type: &'static str,
}

impl GridPayload {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            row_count: grid.row_count,
            column_count: grid.column_count,
            widgets: grid
                .widgets
                .iter()
                .map(|widget| WidgetPayload {
                    kind: "GridWidget",
                    widget: widget.clone(),
                })
                .collect(),
            links: PayloadLinks {
                page: PageLink {
                    href: grid.page.clone(),
                    media_type: "text/html",
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct GridSchema {
    #[serde(rename = "_type")]
    kind: &'static str,
    id: PropertySchema,
    #[serde(rename = "rowCount")]
    row_count: PropertySchema,
    #[serde(rename = "columnCount")]
    column_count: PropertySchema,
    widgets: PropertySchema,
    page: PropertySchema,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertySchema {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    required: bool,
    has_default: bool,
    writable: bool,
}

impl GridSchema {
    fn new(writable: &WritableFields) -> Self {
        let property = |kind: &'static str, name: &'static str, field: Option<GridField>| {
            PropertySchema {
                kind,
                name,
                required: true,
                has_default: false,
                writable: field.is_some_and(|f| writable.contains(f)),
            }
        };
        Self {
            kind: "Schema",
            id: property("Integer", "ID", None),
            row_count: property("Integer", "Number of rows", Some(GridField::RowCount)),
            column_count: property("Integer", "Number of columns", Some(GridField::ColumnCount)),
            widgets: property("[]GridWidget", "Widgets", Some(GridField::Widgets)),
            page: property("Url", "Page", Some(GridField::Page)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ErrorResource {
    #[serde(rename = "_type")]
    kind: &'static str,
    #[serde(rename = "errorIdentifier")]
    error_identifier: &'static str,
    message: String,
    #[serde(rename = "_embedded")]
    embedded: ErrorEmbedded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum ErrorEmbedded {
    Details { details: ErrorAttribute },
    Errors { errors: Vec<ErrorResource> },
}

#[derive(Debug, Clone, Serialize)]
struct ErrorAttribute {
    attribute: &'static str,
}

impl ErrorResource {
    fn violation(field: GridField, detail: &ErrorDetail) -> Self {
        Self {
            kind: "Error",
            error_identifier: PROPERTY_CONSTRAINT_VIOLATION,
            message: messages::message(field, detail),
            embedded: ErrorEmbedded::Details {
                details: ErrorAttribute {
                    attribute: field.api_name(),
                },
            },
        }
    }

    /// One error per field: a single violation, or a `MultipleErrors`
    /// wrapper led by the first message.
    fn for_field(field: GridField, details: &[ErrorDetail]) -> Option<Self> {
        let mut errors: Vec<Self> = details
            .iter()
            .map(|detail| Self::violation(field, detail))
            .collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self {
                kind: "Error",
                error_identifier: MULTIPLE_ERRORS,
                message: errors[0].message.clone(),
                embedded: ErrorEmbedded::Errors { errors },
            }),
        }
    }
}

impl Form {
    /// Describe `grid` after validation. `commit` is only linked when the
    /// result is valid.
    pub fn render(
        id: GridId,
        grid: &Grid,
        result: &ValidationResult,
        writable: &WritableFields,
    ) -> Self {
        let validation_errors = result
            .iter()
            .filter_map(|(field, details)| {
                ErrorResource::for_field(field, details).map(|e| (field.api_name(), e))
            })
            .collect();

        let form_href = paths::grid_form(id);
        Self {
            kind: "Form",
            embedded: FormEmbedded {
                payload: GridPayload::from_grid(grid),
                schema: GridSchema::new(writable),
                validation_errors,
            },
            links: FormLinks {
                this: Link::new(form_href.clone(), "post"),
                validate: Link::new(form_href, "post"),
                commit: result
                    .is_valid()
                    .then(|| Link::new(paths::grid(id), "patch")),
            },
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.embedded.validation_errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(
            |e| serde_json::json!({ "error": format!("failed to serialize form: {e}") }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_config::VariantRegistry;
    use dashgrid_layout::validate;
    use serde_json::json;

    fn render(grid: &Grid, writable: &WritableFields) -> serde_json::Value {
        let result = validate(grid, writable, &VariantRegistry::default());
        Form::render(GridId(1), grid, &result, writable).to_json()
    }

    fn my_page_grid() -> Grid {
        let mut grid = Grid::new(Some("my_page".into()), Some("/my/page".into()));
        grid.row_count = Some(4);
        grid.column_count = Some(5);
        grid
    }

    #[test]
    fn valid_form_links_commit() {
        let json = render(&my_page_grid(), &WritableFields::layout_only());
        assert_eq!(json["_type"], "Form");
        assert_eq!(json["_links"]["commit"], json!({ "href": "/api/v3/grids/1", "method": "patch" }));
        assert_eq!(json["_links"]["self"]["href"], "/api/v3/grids/1/form");
        assert_eq!(json["_embedded"]["validationErrors"], json!({}));
    }

    #[test]
    fn schema_reflects_writable_fields() {
        let json = render(&my_page_grid(), &WritableFields::layout_only());
        let schema = &json["_embedded"]["schema"];
        assert_eq!(schema["_type"], "Schema");
        assert_eq!(schema["page"]["writable"], false);
        assert_eq!(schema["rowCount"]["writable"], true);
        assert_eq!(schema["widgets"]["type"], "[]GridWidget");
        assert_eq!(schema["id"]["writable"], false);

        let json = render(&my_page_grid(), &WritableFields::all());
        assert_eq!(json["_embedded"]["schema"]["page"]["writable"], true);
    }

    #[test]
    fn payload_shape() {
        let mut grid = my_page_grid();
        grid.widgets.push(Widget::new("news", 1, 2, 1, 2));
        let json = render(&grid, &WritableFields::layout_only());
        assert_eq!(
            json["_embedded"]["payload"],
            json!({
                "rowCount": 4,
                "columnCount": 5,
                "widgets": [{
                    "_type": "GridWidget",
                    "identifier": "news",
                    "startRow": 1,
                    "endRow": 2,
                    "startColumn": 1,
                    "endColumn": 2
                }],
                "_links": { "page": { "href": "/my/page", "type": "text/html" } }
            })
        );
    }

    #[test]
    fn single_error_is_property_violation() {
        let mut grid = my_page_grid();
        grid.set_page(Some("/some/path".into()));
        let json = render(&grid, &WritableFields::layout_only());
        let error = &json["_embedded"]["validationErrors"]["page"];
        assert_eq!(error["_type"], "Error");
        assert_eq!(error["errorIdentifier"], PROPERTY_CONSTRAINT_VIOLATION);
        assert_eq!(error["message"], "You must not write a read-only attribute.");
        assert_eq!(error["_embedded"]["details"]["attribute"], "page");
        assert!(json["_links"].get("commit").is_none());
    }

    #[test]
    fn several_errors_are_wrapped() {
        let mut grid = my_page_grid();
        grid.add_widget(Widget::new("work_packages_assigned", 1, 3, 1, 3));
        grid.add_widget(Widget::new("work_packages_created", 2, 4, 2, 4));
        let json = render(&grid, &WritableFields::layout_only());
        let error = &json["_embedded"]["validationErrors"]["widgets"];
        assert_eq!(error["errorIdentifier"], MULTIPLE_ERRORS);
        assert_eq!(error["message"], "Widgets overlap.");
        assert_eq!(error["_embedded"]["errors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn errors_use_api_names() {
        let mut grid = my_page_grid();
        grid.set_row_count(Some(0));
        let json = render(&grid, &WritableFields::layout_only());
        let errors = json["_embedded"]["validationErrors"].as_object().unwrap();
        assert!(errors.contains_key("rowCount"));
        assert_eq!(errors["rowCount"]["message"], "Row count must be greater than 0.");
    }
}
