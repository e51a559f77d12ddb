//! Configuration management commands.
//!
//! All subcommands operate on the cascading configuration resolved by
//! `lt_config`: `show` and `get` read the fully merged effective tree for a
//! directory, while `init` and `set` write to that directory's own file
//! only, leaving the rest of the hierarchy untouched.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde_json::Value;
use tracing::debug;

use lt_config::{save_config, ConfigFormat, ConfigResolver, ConfigTree};

use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create an initial configuration file
    Init {
        /// Directory to create the file in (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// File format to write: "json" or "yaml"
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Show the effective (merged) configuration
    Show {
        /// Directory to resolve from (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Get one value from the effective configuration
    Get {
        /// Directory to resolve from (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Configuration key to get (e.g. "commands.server.module.controller")
        key: String,
    },

    /// Update a value in the directory's configuration file
    Set {
        /// Directory whose configuration file to update (defaults to the
        /// current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Configuration key to set (e.g. "defaults.noConfirm")
        key: String,

        /// Value to set; parsed as JSON when possible, otherwise taken as a
        /// string ("null" deletes the key)
        value: String,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommands) -> Result<(), Error> {
    match cmd {
        ConfigCommands::Init { dir, format } => {
            let path = init_config(dir.as_deref(), &format)?;
            println!("Configuration initialized at {}", path.display());
            Ok(())
        }
        ConfigCommands::Show { dir } => {
            let config = ConfigResolver::new().load_config(dir.as_deref());
            println!("{}", render(&config));
            Ok(())
        }
        ConfigCommands::Get { dir, key } => {
            let config = ConfigResolver::new().load_config(dir.as_deref());
            let value = lookup(&config, &key).ok_or(Error::KeyNotFound(key))?;
            println!("{value}");
            Ok(())
        }
        ConfigCommands::Set { dir, key, value } => {
            let path = set_value(dir.as_deref(), &key, &value)?;
            println!("Configuration updated at {}", path.display());
            Ok(())
        }
    }
}

/// Writes a starter configuration file, refusing to clobber an existing one.
fn init_config(dir: Option<&Path>, format: &str) -> Result<PathBuf, Error> {
    let format = parse_format(format)?;
    let directory = target_directory(dir)?;

    let path = directory.join(format.file_name());
    if path.exists() {
        return Err(Error::Config(format!(
            "Configuration file already exists at {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), "initializing configuration");
    Ok(save_config(&ConfigTree::new(), &directory, format)?)
}

/// Applies one dotted-key assignment to the directory's configuration file.
fn set_value(dir: Option<&Path>, key: &str, raw: &str) -> Result<PathBuf, Error> {
    let directory = target_directory(dir)?;
    let partial = partial_for(key, parse_cli_value(raw))?;
    Ok(ConfigResolver::new().update(partial, &directory)?)
}

fn target_directory(dir: Option<&Path>) -> Result<PathBuf, Error> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|err| Error::Config(format!("cannot determine current directory: {err}"))),
    }
}

fn parse_format(raw: &str) -> Result<ConfigFormat, Error> {
    match raw {
        "json" => Ok(ConfigFormat::Json),
        "yaml" => Ok(ConfigFormat::Yaml),
        other => Err(Error::InvalidArguments(format!(
            "unknown format '{other}' (expected \"json\" or \"yaml\")"
        ))),
    }
}

/// CLI values are JSON when they parse as JSON, plain strings otherwise, so
/// `true`, `3000`, and `[1,2]` keep their types without requiring quoting.
fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Builds the nested partial tree for one `a.b.c = value` assignment.
fn partial_for(dotted_key: &str, value: Value) -> Result<ConfigTree, Error> {
    let mut keys = dotted_key.split('.').rev();
    let leaf = keys
        .next()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| Error::InvalidArguments("empty configuration key".to_string()))?;

    let mut partial = ConfigTree::new();
    partial.insert(leaf.to_string(), value);
    for key in keys {
        if key.is_empty() {
            return Err(Error::InvalidArguments(format!(
                "malformed configuration key '{dotted_key}'"
            )));
        }
        let mut wrapper = ConfigTree::new();
        wrapper.insert(key.to_string(), Value::Object(partial));
        partial = wrapper;
    }
    Ok(partial)
}

/// Navigates a merged tree by dotted key.
fn lookup<'a>(config: &'a ConfigTree, dotted_key: &str) -> Option<&'a Value> {
    let mut keys = dotted_key.split('.');
    let mut node = config.get(keys.next()?)?;
    for key in keys {
        node = node.as_object()?.get(key)?;
    }
    Some(node)
}

fn render(config: &ConfigTree) -> String {
    serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string())
}
