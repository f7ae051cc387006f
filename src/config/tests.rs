//! Config domain: tests for RON parsing, validation, and fallback.

use std::path::Path;

use super::loader::parse_widget_config;
use super::{CharacterShape, WidgetConfig, load_widget_config, resolve_config, validate_config};

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&WidgetConfig::default()).is_empty());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_widget_config("inline", "(walk_step: 40.0, shape: Circle)").unwrap();

    assert_eq!(config.walk_step, 40.0);
    assert_eq!(config.shape, CharacterShape::Circle);
    assert_eq!(config.walk_duration, 2.0);
    assert_eq!(config.edge_margin, 10.0);
    assert_eq!(config.resume_walk_delay, 0.5);
}

#[test]
fn test_empty_config_is_default() {
    let config = parse_widget_config("inline", "()").unwrap();
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_widget_config("widget.ron", "(walk_step: \"far\")").unwrap_err();
    assert_eq!(err.file, "widget.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load widget.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_widget_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::WIDGET_CONFIG_PATH);
    let config = load_widget_config(&path).unwrap();
    assert!(validate_config(&config).is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_validation_flags_bad_fields() {
    let config = WidgetConfig {
        walk_duration: 0.0,
        spring_mass: -1.0,
        edge_margin: -5.0,
        ..Default::default()
    };

    let errors = validate_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"walk_duration"));
    assert!(fields.contains(&"spring_mass"));
    assert!(fields.contains(&"edge_margin"));
}

#[test]
fn test_validation_rejects_zero_damping() {
    let config = WidgetConfig {
        spring_damping: 0.0,
        ..Default::default()
    };

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "spring_damping");
    assert_eq!(errors[0].reason, "must be positive");
}

#[test]
fn test_validation_rejects_nan() {
    let config = WidgetConfig {
        walk_step: f32::NAN,
        ..Default::default()
    };
    assert_eq!(validate_config(&config).len(), 1);
}

#[test]
fn test_resolve_falls_back_on_missing_file() {
    let config = resolve_config(Path::new("does/not/exist.ron"));
    assert_eq!(config, WidgetConfig::default());
}
