//! Built-in variants shipped when no registry file overrides them.

use dashgrid_common::Widget;

use super::{DefaultLayout, VariantConfig};

/// The personal dashboard at `/my/page`.
pub fn my_page_variant() -> VariantConfig {
    VariantConfig {
        key: "my_page".into(),
        page: "/my/page".into(),
        allowed_widgets: [
            "work_packages_assigned",
            "work_packages_accountable",
            "work_packages_watched",
            "work_packages_created",
            "work_packages_calendar",
            "time_entries_current_user",
            "documents",
            "news",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        default_layout: DefaultLayout {
            row_count: 4,
            column_count: 5,
            widgets: vec![
                Widget::new("work_packages_assigned", 4, 5, 1, 2),
                Widget::new("work_packages_created", 1, 2, 1, 2),
                Widget::new("work_packages_watched", 2, 4, 4, 5),
                Widget::new("work_packages_calendar", 1, 2, 4, 6),
            ],
        },
    }
}

/// The project overview dashboard at `/projects/{project}`.
pub fn project_overview_variant() -> VariantConfig {
    VariantConfig {
        key: "project_overview".into(),
        page: "/projects/{project}".into(),
        allowed_widgets: [
            "project_description",
            "project_details",
            "work_packages_overview",
            "work_packages_table",
            "time_entries_project",
            "members",
            "news",
            "subprojects",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        default_layout: DefaultLayout {
            row_count: 3,
            column_count: 2,
            widgets: vec![
                Widget::new("project_description", 1, 2, 1, 2),
                Widget::new("project_details", 1, 2, 2, 3),
                Widget::new("work_packages_overview", 2, 3, 1, 3),
                Widget::new("members", 3, 4, 1, 2),
                Widget::new("news", 3, 4, 2, 3),
            ],
        },
    }
}
