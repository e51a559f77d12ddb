//! Cascading configuration resolution for the `lt` command-line tool.
//!
//! This crate resolves a single effective configuration from zero or more
//! configuration files spread across a directory hierarchy (project root,
//! subdirectories, monorepo packages), and exposes the value-resolution
//! helpers every command uses to combine CLI flags, configuration file
//! values, global defaults, and interactive input into one final value per
//! setting.
//!
//! # Resolution pipeline
//!
//! 1. [`DirectoryWalker`] walks from a start directory up to the filesystem
//!    root, asking [`ConfigFileLocator`] for the single winning configuration
//!    file per directory.
//! 2. [`ConfigFileLocator`] reads the winning file and parses it through
//!    [`parse`](format::parse), which handles JSON, YAML, and auto-detection.
//! 3. The collected per-directory trees are folded root-first through
//!    [`merge_trees`], applying null-tombstone deletion and whole-array
//!    replacement.
//! 4. Commands call [`get_value`] (or the fixed specializations
//!    [`get_no_confirm`] / [`get_skip_lint`]) per setting.
//!
//! Missing or broken configuration is never fatal: every per-directory
//! failure degrades to "this directory contributes nothing", with a
//! suppressible warning. The only terminal zero state is an empty tree.

pub mod errors;
pub mod format;
pub mod loader;
pub mod locate;
pub mod merge;
pub mod persist;
pub mod resolve;
pub mod walker;

// Re-export for convenient access
pub use errors::{ConfigError, ConfigResult, ParseDetail};
pub use format::{parse, ConfigFormat, ConfigTree};
pub use loader::ConfigResolver;
pub use locate::{
    ConfigFileDescriptor, ConfigFileLocator, ResolvedLevel, CONFIG_FILE_AUTO, CONFIG_FILE_JSON,
    CONFIG_FILE_YAML,
};
pub use merge::{merge_into, merge_trees};
pub use persist::{save_config, update_config};
pub use resolve::{
    get_global_default, get_no_confirm, get_skip_lint, get_value, ValueCandidates,
};
pub use walker::DirectoryWalker;
