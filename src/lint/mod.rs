// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The validation entry point.
//!
//! [`Linter`] wires the pipeline together: vocabulary load, header parse,
//! rule evaluation, outcome aggregation. It holds no rule logic of its
//! own. Construction is the only fallible step (the configured header
//! pattern must compile); validation itself always produces an outcome,
//! however malformed the message.

use crate::commit::HeaderPattern;
use crate::config::CgConfig;
use crate::error::Result;
use crate::rules::{LintOutcome, RuleEngine};
use crate::vocab::Vocabulary;

/// Validates commit messages against the configured convention.
#[derive(Debug, Clone)]
pub struct Linter {
    pattern: HeaderPattern,
    config: CgConfig,
}

impl Linter {
    /// Create a linter from configuration. Fails only on an invalid
    /// header pattern override.
    pub fn new(config: &CgConfig) -> Result<Self> {
        let pattern = HeaderPattern::from_config(&config.header)?;
        Ok(Self {
            pattern,
            config: config.clone(),
        })
    }

    /// Validate one raw commit message.
    ///
    /// The vocabulary is loaded fresh on every call so each validation
    /// sees the current remote catalog; runs share no mutable state and
    /// may execute concurrently.
    pub fn validate(&self, raw: &str) -> LintOutcome {
        let vocabulary = Vocabulary::load(&self.config.vocab);
        let header = self.pattern.parse(raw);
        let engine = RuleEngine::new(vocabulary, self.config.rules.clone());
        let verdicts = engine.evaluate(header.as_ref());
        LintOutcome::from_verdicts(raw.to_string(), verdicts)
    }

    /// Load the vocabulary this linter would validate against.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::load(&self.config.vocab)
    }
}
