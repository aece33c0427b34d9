// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cg.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cg.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CgConfig {
    /// Header parsing configuration.
    pub header: HeaderConfig,

    /// Vocabulary source configuration.
    pub vocab: VocabConfig,

    /// Rule severity configuration.
    pub rules: RulesConfig,

    /// CI-specific configuration.
    pub ci: CiConfig,
}

impl CgConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Header parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HeaderConfig {
    /// Override for the structural header pattern. Must define the `type`,
    /// `scope`, and `subject` named capture groups.
    pub pattern: Option<String>,
}

/// Vocabulary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VocabConfig {
    /// URL of the remote tag document. When absent, the built-in
    /// vocabularies are used without any network access.
    pub url: Option<String>,

    /// Transport timeout handed to the HTTP client. When absent, no
    /// timeout is set and the transport's own policy applies.
    pub timeout_secs: Option<u64>,
}

/// Per-rule severity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Severity of the type membership rule.
    pub type_enum: Severity,

    /// Severity of the scope membership rule.
    pub scope_enum: Severity,

    /// Severity of the subject casing rule.
    pub subject_case: Severity,

    /// Severity of the subject ticket-prefix rule.
    pub subject_prefix: Severity,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            type_enum: Severity::Error,
            scope_enum: Severity::Error,
            subject_case: Severity::Error,
            subject_prefix: Severity::Error,
        }
    }
}

/// CI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CiConfig {
    /// Whether warning-severity failures also reject the message.
    pub fail_on_warning: bool,
}

/// Severity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Disabled,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Disabled => "disabled",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "disabled" | "off" => Ok(Severity::Disabled),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
