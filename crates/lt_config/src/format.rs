//! Multi-format configuration parsing.
//!
//! Parses raw configuration text into a [`ConfigTree`] for a given or
//! auto-detected format. Both JSON and YAML documents are deserialized into
//! the same string-keyed `serde_json` map so the rest of the pipeline is
//! format-agnostic.

use std::fmt;

use serde_json::Value;

use crate::errors::ParseDetail;

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

/// The configuration tree: a string-keyed mapping whose values are scalars,
/// nested trees, arrays, or `null` (which the merger treats as a deletion
/// tombstone, never as a storable value).
pub type ConfigTree = serde_json::Map<String, Value>;

/// Supported on-disk configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// The explicit configuration file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => crate::locate::CONFIG_FILE_JSON,
            ConfigFormat::Yaml => crate::locate::CONFIG_FILE_YAML,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parses configuration text into a tree, returning the tree together with
/// the format that actually produced it.
///
/// With an explicit `hint` only that format is attempted and its structured
/// error (with position information where the underlying parser exposes it)
/// is returned on failure. Without a hint, JSON is attempted first and YAML
/// second; if both fail the error carries both underlying messages so the
/// caller can report them verbatim instead of guessing which format the user
/// intended.
///
/// A document whose top level is not a mapping is a parse failure for the
/// attempted format: the tree type is a string-keyed map, and a bare scalar
/// or sequence cannot participate in cascading merges.
///
/// Empty or whitespace-only text must not be passed in; the file locator
/// screens it out beforehand and treats it as "no contribution".
pub fn parse(text: &str, hint: Option<ConfigFormat>) -> Result<(ConfigTree, ConfigFormat), ParseDetail> {
    match hint {
        Some(ConfigFormat::Json) => parse_json(text).map(|tree| (tree, ConfigFormat::Json)),
        Some(ConfigFormat::Yaml) => parse_yaml(text).map(|tree| (tree, ConfigFormat::Yaml)),
        None => match serde_json::from_str::<ConfigTree>(text) {
            Ok(tree) => Ok((tree, ConfigFormat::Json)),
            Err(json_err) => match serde_yaml::from_str::<ConfigTree>(text) {
                Ok(tree) => Ok((tree, ConfigFormat::Yaml)),
                Err(yaml_err) => Err(ParseDetail::Ambiguous {
                    json_message: json_err.to_string(),
                    yaml_message: yaml_err.to_string(),
                }),
            },
        },
    }
}

fn parse_json(text: &str) -> Result<ConfigTree, ParseDetail> {
    serde_json::from_str(text).map_err(|err| ParseDetail::Json {
        message: err.to_string(),
        line: err.line(),
        column: err.column(),
    })
}

fn parse_yaml(text: &str) -> Result<ConfigTree, ParseDetail> {
    serde_yaml::from_str(text).map_err(|err| {
        let location = err.location();
        ParseDetail::Yaml {
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    })
}
