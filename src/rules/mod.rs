// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A fixed, ordered set of rules evaluated against a parsed commit
//! header and the active vocabularies.

mod builtin;
mod engine;
mod report;

pub use builtin::RuleId;
pub use engine::{RuleEngine, HEADER_FORMAT_RULE};
pub use report::{LintOutcome, RuleVerdict};
