//! Directory-hierarchy walk for cascading configuration.
//!
//! Walks from a start directory up to the filesystem root, collecting at
//! most one resolved configuration per directory, and returns the levels
//! root-first so that deeper directories carry higher merge priority.

use std::path::Path;

use tracing::debug;

use crate::locate::{ConfigFileLocator, ResolvedLevel};

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;

/// Upward directory walker.
///
/// The walk is finite and bounded by real filesystem nesting; it performs no
/// caching and revisits the filesystem on every call.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryWalker {
    locator: ConfigFileLocator,
}

impl DirectoryWalker {
    pub fn new(suppress_warnings: bool) -> Self {
        Self {
            locator: ConfigFileLocator::new(suppress_warnings),
        }
    }

    /// Collects every directory level that contributes configuration,
    /// ordered root-first (lowest merge priority first).
    ///
    /// The start directory is canonicalized so the walk terminates at the
    /// true filesystem root rather than at the head of a relative path;
    /// `Path::parent` returning `None` (or the parent equalling the current
    /// directory) is the platform-aware root predicate.
    pub fn walk(&self, start: &Path) -> Vec<ResolvedLevel> {
        let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

        let mut levels = Vec::new();
        let mut current = start.as_path();
        loop {
            if let Some(level) = self.locator.locate(current) {
                levels.push(level);
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => break,
            }
        }

        // Collected child-to-root; merge priority is root-to-child.
        levels.reverse();
        debug!(
            start = %start.display(),
            levels = levels.len(),
            "directory walk complete"
        );
        levels
    }
}
