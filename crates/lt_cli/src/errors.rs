//! Errors for the lt CLI application.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the lt CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be written or updated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested key does not exist in the effective configuration.
    #[error("Key not found in effective configuration: {0}")]
    KeyNotFound(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<lt_config::ConfigError> for Error {
    fn from(err: lt_config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
