//! Configuration persistence.
//!
//! Serializes a configuration tree back to disk in a hand-editable form:
//! pretty-printed JSON with 2-space indentation, or block-style YAML. Only
//! the exact file name for the requested format is ever written; other
//! configuration file variants in the same directory are left untouched, and
//! nothing here deletes files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{ConfigError, ConfigResult};
use crate::format::{ConfigFormat, ConfigTree};
use crate::locate::ConfigFileLocator;
use crate::merge::merge_into;

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;

/// Writes `tree` as a new configuration file in `directory`, overwriting any
/// existing file of that exact name. Returns the path written.
pub fn save_config(
    tree: &ConfigTree,
    directory: &Path,
    format: ConfigFormat,
) -> ConfigResult<PathBuf> {
    let text = match format {
        ConfigFormat::Json => {
            let mut text =
                serde_json::to_string_pretty(tree).map_err(|err| ConfigError::Serialize {
                    format,
                    reason: err.to_string(),
                })?;
            text.push('\n');
            text
        }
        ConfigFormat::Yaml => {
            serde_yaml::to_string(tree).map_err(|err| ConfigError::Serialize {
                format,
                reason: err.to_string(),
            })?
        }
    };

    if !directory.exists() {
        fs::create_dir_all(directory).map_err(|err| ConfigError::Write {
            path: directory.display().to_string(),
            reason: err.to_string(),
        })?;
    }

    let path = directory.join(format.file_name());
    debug!(path = %path.display(), format = %format, "writing configuration file");
    fs::write(&path, text).map_err(|err| ConfigError::Write {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    info!(path = %path.display(), "configuration saved");
    Ok(path)
}

/// Merges `partial` on top of the directory's current configuration file and
/// writes the result back.
///
/// Only the single highest-priority file in `directory` participates (no
/// hierarchy walk). The rewrite keeps that file's detected format so an
/// update never switches a file from one format to the other; when the
/// directory has no configuration file yet, a fresh JSON file is created.
pub fn update_config(
    partial: ConfigTree,
    directory: &Path,
    suppress_warnings: bool,
) -> ConfigResult<PathBuf> {
    let locator = ConfigFileLocator::new(suppress_warnings);
    let (mut base, format) = match locator.locate(directory) {
        Some(level) => (level.tree, level.descriptor.format),
        None => (ConfigTree::new(), ConfigFormat::Json),
    };

    merge_into(&mut base, partial);
    save_config(&base, directory, format)
}
