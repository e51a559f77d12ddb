//! Tests for configuration persistence.

use super::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn tree(value: serde_json::Value) -> ConfigTree {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test fixture must be an object, got {other:?}"),
    }
}

// ============================================================================
// save_config
// ============================================================================

#[test]
fn test_save_json_is_pretty_printed_with_two_space_indent() {
    let dir = TempDir::new().unwrap();
    let path = save_config(
        &tree(json!({"defaults": {"noConfirm": true}})),
        dir.path(),
        ConfigFormat::Json,
    )
    .expect("save should succeed");

    assert_eq!(path, dir.path().join("lt.config.json"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(
        written.contains("  \"defaults\": {"),
        "JSON must be hand-editable with 2-space indentation, got:\n{written}"
    );
    assert!(written.ends_with('\n'), "file should end with a newline");
}

#[test]
fn test_save_yaml_is_block_style() {
    let dir = TempDir::new().unwrap();
    let path = save_config(
        &tree(json!({"defaults": {"editor": "vim"}, "tags": ["a", "b"]})),
        dir.path(),
        ConfigFormat::Yaml,
    )
    .expect("save should succeed");

    assert_eq!(path, dir.path().join("lt.config.yaml"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("defaults:\n"), "got:\n{written}");
    assert!(written.contains("- a\n"), "sequences should be block style");
}

#[test]
fn test_save_overwrites_only_its_own_file_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lt.config.yaml"), "a: 1\n").unwrap();

    save_config(&tree(json!({"a": 2})), dir.path(), ConfigFormat::Json).unwrap();

    let yaml = fs::read_to_string(dir.path().join("lt.config.yaml")).unwrap();
    assert_eq!(yaml, "a: 1\n", "other config variants must be left untouched");
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("not").join("yet").join("there");

    let path = save_config(&tree(json!({"a": 1})), &nested, ConfigFormat::Json)
        .expect("save should create missing directories");
    assert!(path.is_file());
}

#[test]
fn test_saved_files_round_trip_through_the_locator() {
    let dir = TempDir::new().unwrap();
    let original = tree(json!({"commands": {"server": {"port": 3000}}}));

    save_config(&original, dir.path(), ConfigFormat::Yaml).unwrap();
    let level = crate::locate::ConfigFileLocator::new(true)
        .locate(dir.path())
        .expect("saved file should be locatable");
    assert_eq!(level.tree, original);
}

// ============================================================================
// update_config
// ============================================================================

#[test]
fn test_update_creates_json_when_no_file_exists() {
    let dir = TempDir::new().unwrap();
    let path = update_config(tree(json!({"a": 1})), dir.path(), true).unwrap();

    assert_eq!(path, dir.path().join("lt.config.json"));
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, json!({"a": 1}));
}

#[test]
fn test_update_merges_partial_on_top() {
    let dir = TempDir::new().unwrap();
    save_config(
        &tree(json!({"a": {"keep": 1, "replace": 2}})),
        dir.path(),
        ConfigFormat::Json,
    )
    .unwrap();

    update_config(tree(json!({"a": {"replace": 3}, "b": true})), dir.path(), true).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("lt.config.json")).unwrap())
            .unwrap();
    assert_eq!(written, json!({"a": {"keep": 1, "replace": 3}, "b": true}));
}

#[test]
fn test_update_applies_tombstones() {
    let dir = TempDir::new().unwrap();
    save_config(&tree(json!({"a": 1, "b": 2})), dir.path(), ConfigFormat::Json).unwrap();

    update_config(tree(json!({"a": null})), dir.path(), true).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("lt.config.json")).unwrap())
            .unwrap();
    assert_eq!(written, json!({"b": 2}), "tombstoned keys must not be persisted");
}

#[test]
fn test_update_keeps_yaml_files_yaml() {
    let dir = TempDir::new().unwrap();
    save_config(&tree(json!({"a": 1})), dir.path(), ConfigFormat::Yaml).unwrap();

    let path = update_config(tree(json!({"b": 2})), dir.path(), true).unwrap();

    assert_eq!(
        path,
        dir.path().join("lt.config.yaml"),
        "update must not switch an existing file's format"
    );
    let level = crate::locate::ConfigFileLocator::new(true)
        .locate(dir.path())
        .unwrap();
    assert_eq!(level.tree, tree(json!({"a": 1, "b": 2})));
}

#[test]
fn test_update_targets_the_highest_priority_file_only() {
    let dir = TempDir::new().unwrap();
    save_config(&tree(json!({"a": 1})), dir.path(), ConfigFormat::Json).unwrap();
    fs::write(dir.path().join("lt.config.yaml"), "ignored: true\n").unwrap();

    update_config(tree(json!({"b": 2})), dir.path(), true).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("lt.config.json")).unwrap())
            .unwrap();
    assert_eq!(
        written,
        json!({"a": 1, "b": 2}),
        "lower-priority siblings do not participate in update"
    );
    let yaml = fs::read_to_string(dir.path().join("lt.config.yaml")).unwrap();
    assert_eq!(yaml, "ignored: true\n");
}
