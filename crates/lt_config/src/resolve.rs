//! Priority-based value resolution.
//!
//! Given candidate values from the distinct sources a command can draw on,
//! picks the highest-priority candidate that is actually set. "Set" means
//! present and not `null`: `false`, `0`, and `""` are valid values and win
//! over lower-priority candidates, so presence is never decided by
//! falsy-coercion.

use serde_json::Value;

use crate::format::ConfigTree;

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

/// Candidate values for one setting, one slot per source.
///
/// Priority order, highest first: `interactive`, `cli`, `command` (the
/// command-specific subtree, e.g. `commands.server.module.*`), `category`
/// (the command-category subtree, e.g. `commands.git.*`, shared by related
/// sibling commands), `global_default` (the flat `defaults.*` section), and
/// finally `code_default` (the hardcoded fallback).
///
/// `None` models a source that never supplied a value; `Some(Value::Null)`
/// models a source that supplied an explicit `null`. Both count as unset for
/// resolution purposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueCandidates {
    pub interactive: Option<Value>,
    pub cli: Option<Value>,
    pub command: Option<Value>,
    pub category: Option<Value>,
    pub global_default: Option<Value>,
    pub code_default: Option<Value>,
}

/// Resolves one setting from its candidate set.
///
/// Returns the highest-priority set candidate, or the code default (itself
/// defaulting to `null`) when no source set the value.
///
/// # Examples
///
/// ```rust
/// use lt_config::{get_value, ValueCandidates};
/// use serde_json::{json, Value};
///
/// // A falsy-but-set CLI value beats a truthy config value.
/// let resolved = get_value(ValueCandidates {
///     cli: Some(json!(false)),
///     command: Some(json!(true)),
///     ..Default::default()
/// });
/// assert_eq!(resolved, json!(false));
///
/// // An explicit null is unset, not a value.
/// let resolved = get_value(ValueCandidates {
///     cli: Some(Value::Null),
///     command: Some(json!("x")),
///     ..Default::default()
/// });
/// assert_eq!(resolved, json!("x"));
/// ```
pub fn get_value(candidates: ValueCandidates) -> Value {
    let prioritized = [
        candidates.interactive,
        candidates.cli,
        candidates.command,
        candidates.category,
        candidates.global_default,
    ];
    for slot in prioritized {
        if let Some(value) = slot {
            if !value.is_null() {
                return value;
            }
        }
    }
    candidates.code_default.unwrap_or(Value::Null)
}

/// Reads one key from the flat `defaults.*` section of a merged tree.
pub fn get_global_default<'a>(tree: &'a ConfigTree, key: &str) -> Option<&'a Value> {
    tree.get("defaults")?.as_object()?.get(key)
}

/// Resolves the boolean "skip confirmation prompts" setting:
/// `cli > command config > defaults.noConfirm > false`.
pub fn get_no_confirm(cli: Option<bool>, command_config: Option<&Value>, tree: &ConfigTree) -> bool {
    resolve_flag(cli, command_config, tree, "noConfirm")
}

/// Resolves the boolean "skip lint" setting:
/// `cli > command config > defaults.skipLint > false`.
pub fn get_skip_lint(cli: Option<bool>, command_config: Option<&Value>, tree: &ConfigTree) -> bool {
    resolve_flag(cli, command_config, tree, "skipLint")
}

/// Shared shape of the boolean specializations. Non-boolean config values
/// are skipped like unset ones rather than coerced by truthiness.
fn resolve_flag(
    cli: Option<bool>,
    command_config: Option<&Value>,
    tree: &ConfigTree,
    default_key: &str,
) -> bool {
    if let Some(flag) = cli {
        return flag;
    }
    if let Some(flag) = command_config.and_then(Value::as_bool) {
        return flag;
    }
    get_global_default(tree, default_key)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
