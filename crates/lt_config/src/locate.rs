//! Configuration file discovery within a single directory.
//!
//! Finds which of the supported configuration file names exist in a
//! directory, picks the winner by fixed priority, and parses it. At most one
//! file contributes per directory: a present-but-empty or malformed
//! high-priority file shadows lower-priority siblings instead of falling
//! through to them, so a broken file cannot be silently bypassed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::ParseDetail;
use crate::format::{self, ConfigFormat, ConfigTree};

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;

/// Explicit JSON configuration file name (highest priority).
pub const CONFIG_FILE_JSON: &str = "lt.config.json";

/// Explicit YAML configuration file name.
pub const CONFIG_FILE_YAML: &str = "lt.config.yaml";

/// Auto-detected configuration file name (lowest priority).
pub const CONFIG_FILE_AUTO: &str = "lt.config";

/// Candidate file names in descending priority, paired with the format hint
/// each name forces on the parser. Fixed and case-sensitive.
const CANDIDATES: [(&str, Option<ConfigFormat>); 3] = [
    (CONFIG_FILE_JSON, Some(ConfigFormat::Json)),
    (CONFIG_FILE_YAML, Some(ConfigFormat::Yaml)),
    (CONFIG_FILE_AUTO, None),
];

/// Identity of a configuration file that won discovery in its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileDescriptor {
    /// Full path to the file.
    pub path: PathBuf,
    /// Directory the file was discovered in.
    pub directory: PathBuf,
    /// The matched candidate file name.
    pub file_name: &'static str,
    /// Format the file actually parsed as. Fixed up front for the explicit
    /// names, resolved by trial parse for the auto-detect name.
    pub format: ConfigFormat,
}

/// The single winning parsed configuration for one directory level.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLevel {
    pub descriptor: ConfigFileDescriptor,
    pub tree: ConfigTree,
}

/// Per-directory configuration file locator.
///
/// Stateless apart from the warning-suppression flag, which callers such as
/// automated tests use to keep expected-failure noise out of the logs.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFileLocator {
    suppress_warnings: bool,
}

impl ConfigFileLocator {
    pub fn new(suppress_warnings: bool) -> Self {
        Self { suppress_warnings }
    }

    /// Finds and parses the configuration for one directory.
    ///
    /// Returns `None` when the directory contributes nothing: no candidate
    /// file exists, the winning file is empty, unreadable, or malformed.
    /// Every degraded case emits a warning unless suppressed; none of them
    /// aborts resolution.
    pub fn locate(&self, directory: &Path) -> Option<ResolvedLevel> {
        let present: Vec<(&'static str, Option<ConfigFormat>)> = CANDIDATES
            .iter()
            .copied()
            .filter(|(name, _)| directory.join(name).is_file())
            .collect();

        let (file_name, hint) = *present.first()?;

        if present.len() > 1 && !self.suppress_warnings {
            let ignored: Vec<&str> = present[1..].iter().map(|(name, _)| *name).collect();
            warn!(
                directory = %directory.display(),
                using = file_name,
                ignored = ?ignored,
                "multiple configuration files in one directory; using the highest-priority one"
            );
        }

        let path = directory.join(file_name);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                if !self.suppress_warnings {
                    warn!(
                        path = %path.display(),
                        reason = %err,
                        "cannot read configuration file; directory contributes no configuration"
                    );
                }
                return None;
            }
        };

        if text.trim().is_empty() {
            if !self.suppress_warnings {
                warn!(
                    path = %path.display(),
                    "configuration file is empty; directory contributes no configuration"
                );
            }
            return None;
        }

        match format::parse(&text, hint) {
            Ok((tree, detected)) => {
                debug!(path = %path.display(), format = %detected, "loaded configuration file");
                Some(ResolvedLevel {
                    descriptor: ConfigFileDescriptor {
                        path,
                        directory: directory.to_path_buf(),
                        file_name,
                        format: detected,
                    },
                    tree,
                })
            }
            Err(detail) => {
                if !self.suppress_warnings {
                    self.warn_parse_failure(&path, &detail);
                }
                None
            }
        }
    }

    fn warn_parse_failure(&self, path: &Path, detail: &ParseDetail) {
        match detail {
            ParseDetail::Ambiguous {
                json_message,
                yaml_message,
            } => {
                // Both messages are reported verbatim; we never guess which
                // format the user intended.
                warn!(
                    path = %path.display(),
                    json_error = %json_message,
                    yaml_error = %yaml_message,
                    "configuration file is neither valid JSON nor valid YAML; directory contributes no configuration"
                );
            }
            other => {
                warn!(
                    path = %path.display(),
                    reason = %other,
                    "malformed configuration file; directory contributes no configuration"
                );
            }
        }
    }
}
