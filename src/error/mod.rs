// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cg application.
//!
//! Only configuration problems are fatal. Everything a commit author can
//! get wrong (unparseable header, rule violations) is reported through
//! verdicts, and vocabulary fetch problems are recovered by falling back
//! to the built-in lists.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cg operations.
#[derive(Error, Debug)]
pub enum CgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Lint rejection (carries the exit status for CI)
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid header pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Lint rejection errors. These signal the non-zero exit path, after the
/// outcome has already been printed.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Commit message rejected: {errors} errors, {warnings} warnings")]
    MessageRejected { errors: usize, warnings: usize },

    #[error("No commit message provided")]
    MissingMessage,
}

/// Vocabulary fetch errors. These never escape the vocabulary provider;
/// each variant maps to the fallback path with a logged diagnostic.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status: {status}")]
    Status { status: u16 },

    #[error("Malformed tag document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for cg operations.
pub type Result<T> = std::result::Result<T, CgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/cg.toml"),
        };
        assert!(err.to_string().contains("/path/to/cg.toml"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = ConfigError::InvalidPattern {
            pattern: "(?P<type".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("(?P<type"));
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn test_lint_error_display() {
        let err = LintError::MessageRejected {
            errors: 2,
            warnings: 1,
        };
        assert!(err.to_string().contains("2 errors"));
    }

    #[test]
    fn test_cg_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.type_enum".to_string(),
            message: "unknown severity".to_string(),
        };
        let cg_err: CgError = config_err.into();
        assert!(cg_err.to_string().contains("rules.type_enum"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = res.context("reading message").unwrap_err();
        assert!(err.to_string().contains("reading message"));
    }
}
