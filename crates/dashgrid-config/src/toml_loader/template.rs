//! Default TOML registry template with inline documentation comments.

/// Generate the default TOML registry content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# dashgrid variant registry
# Schema version 1
#
# Each [[variants]] entry registers one concrete grid variant. Listing any
# variant here replaces the built-in set, so keep the ones you still use.
#
# page: the page link a grid of this variant is attached to. A segment
#       written as {name} matches any single path segment.
# allowed_widgets: identifiers that may be placed on the grid.
# default_layout: dimensions and widgets of a newly created grid. Widget
#       bounds are 1-based; end_row/end_column are exclusive, so a widget
#       covering the whole grid ends at row_count + 1 / column_count + 1.

schema_version = 1

[[variants]]
key = "my_page"
page = "/my/page"
allowed_widgets = [
  "work_packages_assigned",
  "work_packages_accountable",
  "work_packages_watched",
  "work_packages_created",
  "work_packages_calendar",
  "time_entries_current_user",
  "documents",
  "news",
]

[variants.default_layout]
row_count = 4       # > 0
column_count = 5    # > 0

[[variants.default_layout.widgets]]
identifier = "work_packages_assigned"
start_row = 4
end_row = 5
start_column = 1
end_column = 2

[[variants.default_layout.widgets]]
identifier = "work_packages_created"
start_row = 1
end_row = 2
start_column = 1
end_column = 2

[[variants.default_layout.widgets]]
identifier = "work_packages_watched"
start_row = 2
end_row = 4
start_column = 4
end_column = 5

[[variants.default_layout.widgets]]
identifier = "work_packages_calendar"
start_row = 1
end_row = 2
start_column = 4
end_column = 6

[[variants]]
key = "project_overview"
page = "/projects/{project}"
allowed_widgets = [
  "project_description",
  "project_details",
  "work_packages_overview",
  "work_packages_table",
  "time_entries_project",
  "members",
  "news",
  "subprojects",
]

[variants.default_layout]
row_count = 3
column_count = 2

[[variants.default_layout.widgets]]
identifier = "project_description"
start_row = 1
end_row = 2
start_column = 1
end_column = 2

[[variants.default_layout.widgets]]
identifier = "project_details"
start_row = 1
end_row = 2
start_column = 2
end_column = 3

[[variants.default_layout.widgets]]
identifier = "work_packages_overview"
start_row = 2
end_row = 3
start_column = 1
end_column = 3

[[variants.default_layout.widgets]]
identifier = "members"
start_row = 3
end_row = 4
start_column = 1
end_column = 2

[[variants.default_layout.widgets]]
identifier = "news"
start_row = 3
end_row = 4
start_column = 2
end_column = 3
"##
    .to_string()
}
