//! Public facade over the resolution pipeline.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::ConfigResult;
use crate::format::{ConfigFormat, ConfigTree};
use crate::merge::merge_trees;
use crate::persist;
use crate::walker::DirectoryWalker;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Entry point used by commands to obtain their effective configuration.
///
/// Carries a single piece of state: whether discovery warnings (multiple
/// candidate files, empty files, malformed files) are emitted or suppressed.
/// Loading is otherwise a pure function of the filesystem's current contents
/// at call time; nothing is cached across calls, and concurrent resolvers
/// are safe since everything except [`save`](ConfigResolver::save) and
/// [`update`](ConfigResolver::update) is read-only.
///
/// # Examples
///
/// ```rust,no_run
/// use lt_config::ConfigResolver;
///
/// let resolver = ConfigResolver::new();
/// let config = resolver.load_config(None);
/// if let Some(defaults) = config.get("defaults") {
///     println!("defaults: {defaults}");
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver {
    suppress_warnings: bool,
}

impl ConfigResolver {
    /// Creates a resolver that emits discovery warnings.
    pub fn new() -> Self {
        Self {
            suppress_warnings: false,
        }
    }

    /// Creates a resolver with discovery warnings suppressed, for contexts
    /// such as automated tests where they would be noise.
    pub fn quiet() -> Self {
        Self {
            suppress_warnings: true,
        }
    }

    /// Resolves the effective configuration for `start` (defaulting to the
    /// process's current working directory): full hierarchy walk plus merge.
    ///
    /// Never fails. A filesystem with no readable configuration anywhere on
    /// the walk yields the empty tree, which is a valid terminal state
    /// rather than an error; a missing optional configuration must never be
    /// fatal to command execution.
    pub fn load_config(&self, start: Option<&Path>) -> ConfigTree {
        let start = match start {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let levels = DirectoryWalker::new(self.suppress_warnings).walk(&start);
        merge_trees(levels.into_iter().map(|level| level.tree))
    }

    /// Resolves the configuration subtree for one command and shallow-merges
    /// CLI options on top, CLI winning key-by-key.
    ///
    /// `command_path` navigates the merged tree's `commands` section, e.g.
    /// `["server", "module"]` reads `commands.server.module`. A path that
    /// does not lead to a subtree yields just the CLI options.
    pub fn command_config(
        &self,
        start: Option<&Path>,
        command_path: &[&str],
        cli_options: ConfigTree,
    ) -> ConfigTree {
        let merged = self.load_config(start);

        let mut node: Option<&Value> = merged.get("commands");
        for key in command_path {
            node = node.and_then(Value::as_object).and_then(|map| map.get(*key));
        }

        let mut result = node.and_then(Value::as_object).cloned().unwrap_or_default();
        for (key, value) in cli_options {
            result.insert(key, value);
        }
        result
    }

    /// Writes `tree` to `directory` in the requested format.
    /// See [`save_config`](crate::persist::save_config).
    pub fn save(
        &self,
        tree: &ConfigTree,
        directory: &Path,
        format: ConfigFormat,
    ) -> ConfigResult<PathBuf> {
        persist::save_config(tree, directory, format)
    }

    /// Merges `partial` into the directory's configuration file.
    /// See [`update_config`](crate::persist::update_config).
    pub fn update(&self, partial: ConfigTree, directory: &Path) -> ConfigResult<PathBuf> {
        persist::update_config(partial, directory, self.suppress_warnings)
    }
}
