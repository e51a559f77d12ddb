//! Deep merge with tombstones and whole-array replacement.
//!
//! Folds an ordered list of configuration trees (lowest to highest priority)
//! into one tree. Three rules distinguish this from a plain recursive merge:
//!
//! - a `null` in the higher-priority tree is a tombstone: the key is removed
//!   from the result entirely, discarding a whole inherited subtree if one
//!   exists at that key;
//! - arrays replace wholesale (never concatenated or merged element-wise),
//!   including replacement by an empty array;
//! - nested trees merge recursively only when both sides hold a tree at the
//!   same key; any other type combination is an outright replacement.
//!
//! Deletions are applied eagerly during the fold, so no `null` sentinel ever
//! survives into the merged result.

use serde_json::Value;

use crate::format::ConfigTree;

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

/// Merges `overlay` into `base`, with `overlay` taking precedence.
pub fn merge_into(base: &mut ConfigTree, overlay: ConfigTree) {
    for (key, value) in overlay {
        match value {
            // Tombstone: delete the key, subtree and all.
            Value::Null => {
                base.remove(&key);
            }
            Value::Object(overlay_map) => match base.get_mut(&key) {
                Some(Value::Object(base_map)) => merge_into(base_map, overlay_map),
                _ => {
                    // Inserting a fresh subtree still goes through the merge
                    // so tombstones nested inside it are stripped.
                    let mut fresh = ConfigTree::new();
                    merge_into(&mut fresh, overlay_map);
                    base.insert(key, Value::Object(fresh));
                }
            },
            // Arrays and scalars replace outright; type changes are allowed.
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Folds trees in priority order (lowest first) into one merged tree.
///
/// An empty sequence yields the empty tree; a single tree yields its own
/// content (with any tombstones stripped, since they are deletion
/// instructions rather than storable values).
pub fn merge_trees(trees: impl IntoIterator<Item = ConfigTree>) -> ConfigTree {
    let mut merged = ConfigTree::new();
    for tree in trees {
        merge_into(&mut merged, tree);
    }
    merged
}
