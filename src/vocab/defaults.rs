// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in vocabularies, used whenever the remote source is absent or
//! unusable.

/// Allowed commit types when no remote vocabulary is available.
pub const DEFAULT_TYPES: [&str; 11] = [
    "breaking-change",
    "new-feature",
    "bug-fix",
    "sec",
    "deprecation",
    "dev",
    "tests",
    "ci",
    "chore",
    "build",
    "docs",
];

/// Allowed commit scopes when no remote vocabulary is available.
pub const DEFAULT_SCOPES: [&str; 11] = [
    "charts",
    "connectors",
    "navigation",
    "general",
    "dashboards",
    "datasets",
    "auth",
    "optimization",
    "role-model",
    "docs",
    "formula",
];

/// The built-in type list as owned strings.
pub(crate) fn default_types() -> Vec<String> {
    DEFAULT_TYPES.iter().map(|s| s.to_string()).collect()
}

/// The built-in scope list as owned strings.
pub(crate) fn default_scopes() -> Vec<String> {
    DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect()
}
