//! Configuration system error types.
//!
//! Domain-specific errors for configuration parsing and persistence.
//! Note that the loading pipeline itself is fail-soft: parse and read
//! failures during resolution are downgraded to warnings and the affected
//! directory simply contributes no configuration. These types therefore
//! surface only through the persistence operations and through
//! [`parse`](crate::format::parse) itself.

use thiserror::Error;

use crate::format::ConfigFormat;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Structured detail about a failed parse attempt.
///
/// Which variant is produced depends on the format hint the parser ran
/// with: an explicit hint yields the matching single-format variant with
/// position information when the underlying parser exposes it; auto-detect
/// failures yield [`ParseDetail::Ambiguous`] carrying both underlying
/// messages, because the parser must not guess which format the user
/// intended.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDetail {
    #[error("invalid JSON (line {line}, column {column}): {message}")]
    Json {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("invalid YAML: {message}")]
    Yaml {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("content is neither valid JSON ({json_message}) nor valid YAML ({yaml_message})")]
    Ambiguous {
        json_message: String,
        yaml_message: String,
    },
}

impl ParseDetail {
    /// The format the failed attempt was bound to, or `None` for an
    /// auto-detect failure where both formats were tried.
    pub fn format(&self) -> Option<ConfigFormat> {
        match self {
            ParseDetail::Json { .. } => Some(ConfigFormat::Json),
            ParseDetail::Yaml { .. } => Some(ConfigFormat::Yaml),
            ParseDetail::Ambiguous { .. } => None,
        }
    }
}

/// Configuration persistence errors.
///
/// Only `save`/`update` can fail hard; everything on the read side degrades
/// to warnings instead, which is why there are no read variants here.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to serialize configuration to {format}: {reason}")]
    Serialize {
        format: ConfigFormat,
        reason: String,
    },

    #[error("Failed to write configuration file: {path} - {reason}")]
    Write { path: String, reason: String },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
