//! Configuration file loading and wiring into a tracker.

use component_tracker::{Component, ComponentTracker, Config, ServiceLocator, TrackingMode};
use component_tracker_mock::{MockComponent, MockLocator, StackBuilder};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(".component-tracker.toml");
    fs::write(&path, contents).expect("write failed");
    (dir, path)
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.tracking.production_mode, None);
    assert!(!config.tracking.replace_default_prefixes);
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, path) = write_config("[tracking\nproduction_mode = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
}

#[test]
fn test_pinned_production_mode_overrides_locator() {
    let (_dir, path) = write_config("[tracking]\nproduction_mode = true\n");
    let config = Config::load_from(&path).unwrap();
    let locator = MockLocator::development();

    let tracker = ComponentTracker::from_config(
        &config,
        Some(locator.clone() as Arc<dyn ServiceLocator>),
    );
    assert!(!tracker.is_active());
    assert_eq!(tracker.gate().mode(), TrackingMode::Inactive);
    assert_eq!(locator.lookups(), 0);
}

#[test]
fn test_no_locator_and_no_pin_stays_inactive() {
    let tracker = ComponentTracker::from_config(&Config::default(), None);
    assert!(!tracker.is_active());
}

#[test]
fn test_config_prefixes_and_navigation_class() {
    let (_dir, path) = write_config(
        r#"
[tracking]
production_mode = false
skip_prefixes = ["my_framework::"]
navigation_class = "my_router::Renderer"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let tracker = ComponentTracker::from_config(&config, None);

    let filter = tracker.resolver().filter();
    assert!(filter.is_internal("my_framework::Layout"));
    assert!(filter.is_internal("std::thread::spawn"));
    assert_eq!(tracker.resolver().navigation_class(), Some("my_router::Renderer"));

    let view = MockComponent::new("app::RouteTarget");
    let stack = StackBuilder::new()
        .call("my_framework::Base", "init")
        .call(view.class_name(), "new")
        .call("my_router::Renderer", "instantiate")
        .build();
    tracker.track_create_from(&view, &stack);
    assert_eq!(tracker.find_create(&view).unwrap().class_name, "app::RouteTarget");
}

#[test]
fn test_replace_default_prefixes() {
    let config = Config::parse(
        "[tracking]\nreplace_default_prefixes = true\nskip_prefixes = [\"only::\"]\n",
    )
    .unwrap();
    let tracker = ComponentTracker::from_config(&config, None);
    let filter = tracker.resolver().filter();
    assert!(filter.is_internal("only::Thing"));
    assert!(!filter.is_internal("std::thread::spawn"));
}
