// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CG - Commit Message Gate
//!
//! A CI gate that validates commit messages against a structured
//! convention: an allowed type, an optional allowed scope, and a
//! ticket-prefixed subject.
//!
//! # Features
//!
//! - **Dynamic Vocabularies**: Allowed types and scopes come from a remote
//!   tag catalog, with built-in defaults whenever the fetch fails
//! - **Structural Parsing**: The commit header splits into type, scope and
//!   subject via a configurable pattern
//! - **Rule Engine**: A fixed, ordered rule set with per-rule severities
//! - **CI-Friendly Reports**: Text or JSON output mapped to the process
//!   exit status
//!
//! # Example
//!
//! ```no_run
//! use cg::config::CgConfig;
//! use cg::lint::Linter;
//!
//! let config = CgConfig::load().unwrap();
//! let linter = Linter::new(&config).unwrap();
//!
//! let outcome = linter.validate("bug-fix(charts): BI-123 fix tooltip overflow");
//! if !outcome.valid {
//!     eprintln!("{}", outcome.render());
//! }
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod lint;
pub mod rules;
pub mod vocab;

// Re-exports for convenience
pub use config::CgConfig;
pub use error::{CgError, Result};
pub use lint::Linter;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
