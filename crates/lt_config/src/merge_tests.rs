//! Tests for the deep-merge engine.

use super::*;
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

/// Builds a ConfigTree from a `json!` object literal.
fn tree(value: serde_json::Value) -> ConfigTree {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test fixture must be an object, got {other:?}"),
    }
}

// ============================================================================
// Basic merging
// ============================================================================

#[test]
fn test_merge_of_nothing_is_empty() {
    assert_eq!(merge_trees([]), ConfigTree::new());
}

#[test]
fn test_merge_of_single_tree_is_that_tree() {
    let single = tree(json!({"a": 1, "b": {"c": [1, 2]}}));
    assert_eq!(merge_trees([single.clone()]), single);
}

#[test]
fn test_higher_priority_scalar_wins() {
    let merged = merge_trees([tree(json!({"a": 1})), tree(json!({"a": 2}))]);
    assert_eq!(merged, tree(json!({"a": 2})));
}

#[test]
fn test_disjoint_keys_are_combined() {
    let merged = merge_trees([tree(json!({"a": 1})), tree(json!({"b": 2}))]);
    assert_eq!(merged, tree(json!({"a": 1, "b": 2})));
}

#[test]
fn test_nested_trees_merge_recursively() {
    let merged = merge_trees([
        tree(json!({"server": {"host": "localhost", "port": 8080}})),
        tree(json!({"server": {"port": 9000}})),
    ]);
    assert_eq!(
        merged,
        tree(json!({"server": {"host": "localhost", "port": 9000}}))
    );
}

#[test]
fn test_type_change_replaces_outright() {
    // Scalar over tree and tree over scalar are both allowed.
    let merged = merge_trees([tree(json!({"value": {"nested": true}})), tree(json!({"value": 42}))]);
    assert_eq!(merged, tree(json!({"value": 42})));

    let merged = merge_trees([tree(json!({"value": 42})), tree(json!({"value": {"nested": true}}))]);
    assert_eq!(merged, tree(json!({"value": {"nested": true}})));
}

// ============================================================================
// Array replacement
// ============================================================================

#[test]
fn test_arrays_replace_wholesale() {
    let merged = merge_trees([
        tree(json!({"tags": ["x", "y", "z"]})),
        tree(json!({"tags": ["w"]})),
    ]);
    assert_eq!(
        merged,
        tree(json!({"tags": ["w"]})),
        "arrays must be replaced, never concatenated or unioned"
    );
}

#[test]
fn test_empty_array_is_a_valid_override() {
    let merged = merge_trees([tree(json!({"tags": ["x"]})), tree(json!({"tags": []}))]);
    assert_eq!(merged, tree(json!({"tags": []})));
}

// ============================================================================
// Tombstones
// ============================================================================

#[test]
fn test_null_deletes_inherited_key() {
    let merged = merge_trees([tree(json!({"a": {"b": 1}})), tree(json!({"a": {"b": null}}))]);
    assert_eq!(
        merged,
        tree(json!({"a": {}})),
        "a tombstoned key must be absent, not set to null"
    );
}

#[test]
fn test_sibling_keys_survive_targeted_tombstone() {
    let merged = merge_trees([
        tree(json!({"a": {"b": 1, "c": 2}})),
        tree(json!({"a": {"b": null}})),
    ]);
    assert_eq!(merged, tree(json!({"a": {"c": 2}})));
}

#[test]
fn test_tombstone_discards_whole_subtree() {
    let merged = merge_trees([
        tree(json!({"a": {"deep": {"deeper": 1}}, "keep": true})),
        tree(json!({"a": null})),
    ]);
    assert_eq!(merged, tree(json!({"keep": true})));
}

#[test]
fn test_tombstoned_key_can_be_reset_by_deeper_level() {
    let merged = merge_trees([
        tree(json!({"a": 1})),
        tree(json!({"a": null})),
        tree(json!({"a": 3})),
    ]);
    assert_eq!(merged, tree(json!({"a": 3})));
}

#[test]
fn test_no_null_sentinels_survive_fresh_inserts() {
    // A subtree inserted into an empty accumulator still has its
    // tombstones stripped.
    let merged = merge_trees([tree(json!({"a": {"b": null, "c": 1}}))]);
    assert_eq!(merged, tree(json!({"a": {"c": 1}})));
}

#[test]
fn test_tombstone_for_missing_key_is_a_no_op() {
    let merged = merge_trees([tree(json!({"a": 1})), tree(json!({"ghost": null}))]);
    assert_eq!(merged, tree(json!({"a": 1})));
}

// ============================================================================
// Multi-level scenarios
// ============================================================================

#[test]
fn test_three_level_command_hierarchy() {
    let root = tree(json!({
        "commands": {"server": {"module": {"controller": "Rest", "skipLint": false}}},
        "meta": {"version": "1.0.0"}
    }));
    let child = tree(json!({
        "commands": {"server": {"module": {"skipLint": true}}},
        "meta": {"name": "child"}
    }));
    let grandchild = tree(json!({
        "commands": {"fullstack": {"frontend": "nuxt"}}
    }));

    let merged = merge_trees([root, child, grandchild]);
    assert_eq!(
        serde_json::Value::Object(merged),
        json!({
            "commands": {
                "server": {"module": {"controller": "Rest", "skipLint": true}},
                "fullstack": {"frontend": "nuxt"}
            },
            "meta": {"version": "1.0.0", "name": "child"}
        })
    );
}
