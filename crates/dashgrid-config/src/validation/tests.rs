//! Tests for registry validation.

use super::*;
use crate::schema::*;
use dashgrid_common::Widget;

#[test]
fn default_registry_validates() {
    let config = RegistryConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_registry() {
    let config = RegistryConfig {
        schema_version: 1,
        variants: Vec::new(),
    };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants must not be empty"));
}

#[test]
fn catches_duplicate_keys() {
    let mut config = RegistryConfig::default();
    config.variants[1].key = "my_page".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate variant key 'my_page'"));
    assert!(err.contains("variants[0] and variants[1]"));
}

#[test]
fn catches_duplicate_pages() {
    let mut config = RegistryConfig::default();
    config.variants[1].page = "/my/page".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate page '/my/page'"));
}

#[test]
fn catches_relative_page() {
    let mut config = RegistryConfig::default();
    config.variants[0].page = "my/page".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].page"));
}

#[test]
fn catches_empty_key() {
    let mut config = RegistryConfig::default();
    config.variants[0].key = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].key must not be empty"));
}

#[test]
fn catches_empty_allowed_widgets() {
    let mut config = RegistryConfig::default();
    config.variants[0].allowed_widgets.clear();
    config.variants[0].default_layout.widgets.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].allowed_widgets must not be empty"));
}

#[test]
fn catches_non_positive_default_dimensions() {
    let mut config = RegistryConfig::default();
    config.variants[0].default_layout.row_count = 0;
    config.variants[0].default_layout.column_count = -2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].default_layout.row_count = 0"));
    assert!(err.contains("variants[0].default_layout.column_count = -2"));
}

#[test]
fn catches_disallowed_default_widget() {
    let mut config = RegistryConfig::default();
    config.variants[0]
        .default_layout
        .widgets
        .push(Widget::new("bogus_identifier", 1, 2, 2, 3));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].default_layout.widgets[4].identifier = 'bogus_identifier'"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = RegistryConfig::default();
    config.variants[0].page = "nowhere".into();
    config.variants[1].allowed_widgets.clear();
    config.variants[1].default_layout.widgets.clear();
    config.variants[1].default_layout.row_count = -1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].page"));
    assert!(err.contains("variants[1].allowed_widgets"));
    assert!(err.contains("variants[1].default_layout.row_count"));
}

#[test]
fn catches_overlapping_default_widgets() {
    let mut config = RegistryConfig::default();
    config.variants[0]
        .default_layout
        .widgets
        .push(Widget::new("news", 1, 3, 1, 3));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].default_layout.widgets[1] overlaps widgets[4]"));
}

#[test]
fn catches_default_widget_outside_grid() {
    let mut config = RegistryConfig::default();
    config.variants[0]
        .default_layout
        .widgets
        .push(Widget::new("news", 3, 4, 5, 7));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[0].default_layout.widgets[4] is outside the 4x5 default grid"));
}

#[test]
fn catches_reversed_default_widget() {
    let mut config = RegistryConfig::default();
    config.variants[1].default_layout.widgets[0] = Widget::new("project_description", 2, 1, 1, 2);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("variants[1].default_layout.widgets[0] ends before it starts"));
    assert!(!err.contains("overlaps"));
}
