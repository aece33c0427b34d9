// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header structure and parsing.

use crate::config::HeaderConfig;
use crate::error::{CgError, ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for splitting a commit header into type, scope and subject.
    /// The separator space is optional so that an empty subject still
    /// parses and can be reported by the rules instead of rejected here.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[a-z-]*)(?:\((?P<scope>[^)]+)\))?:\s?(?P<subject>.*)$"
    ).unwrap();
}

/// Named capture groups a header pattern must define.
const REQUIRED_GROUPS: &[&str] = &["type", "scope", "subject"];

/// A structured commit header.
///
/// Holds the first line of a commit message split into its fields.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// Commit type token (may be empty when the header starts with ':').
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line remainder (may be empty).
    pub subject: String,
}

/// A compiled header pattern.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl Default for HeaderPattern {
    fn default() -> Self {
        Self {
            regex: HEADER_REGEX.clone(),
        }
    }
}

impl HeaderPattern {
    /// Build the pattern from configuration, using the built-in structural
    /// pattern unless an override is given.
    pub fn from_config(config: &HeaderConfig) -> Result<Self> {
        match &config.pattern {
            Some(pattern) => Self::compile(pattern),
            None => Ok(Self::default()),
        }
    }

    /// Compile a custom pattern. The pattern must compile and must define
    /// the `type`, `scope` and `subject` named capture groups.
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            CgError::Config(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })?;

        for group in REQUIRED_GROUPS {
            if !regex.capture_names().flatten().any(|name| name == *group) {
                return Err(CgError::Config(ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: format!("missing named capture group '{}'", group),
                }));
            }
        }

        Ok(Self { regex })
    }

    /// Parse the first line of a raw commit message. Returns `None` when
    /// the line does not match the structural pattern; malformed input is
    /// never an error here.
    pub fn parse(&self, raw: &str) -> Option<CommitHeader> {
        let first_line = raw.lines().next().unwrap_or("");
        let captures = self.regex.captures(first_line)?;

        Some(CommitHeader {
            commit_type: captures
                .name("type")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            subject: captures
                .name("subject")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }
}
