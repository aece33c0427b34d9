// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitHeader;
use crate::config::{RulesConfig, Severity};
use crate::vocab::Vocabulary;

use super::builtin::RuleId;
use super::report::RuleVerdict;

/// Verdict name for input that does not match the header pattern.
pub const HEADER_FORMAT_RULE: &str = "header-format";

/// Rule engine for validating parsed commit headers.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    vocabulary: Vocabulary,
    severities: RulesConfig,
}

impl RuleEngine {
    /// Create a new rule engine over a vocabulary and severity table.
    pub fn new(vocabulary: Vocabulary, severities: RulesConfig) -> Self {
        Self {
            vocabulary,
            severities,
        }
    }

    /// Evaluate all rules against a parsed header, in the fixed rule
    /// order. `None` means the header pattern did not match; that is
    /// terminal for the message and yields a single failing verdict
    /// instead of field-level rules.
    pub fn evaluate(&self, header: Option<&CommitHeader>) -> Vec<RuleVerdict> {
        let header = match header {
            Some(header) => header,
            None => return vec![Self::header_failure()],
        };

        RuleId::ALL
            .iter()
            .map(|rule| {
                let severity = rule.severity(&self.severities);
                if severity == Severity::Disabled {
                    return RuleVerdict::passed(rule.name(), severity);
                }

                match rule.check(header, &self.vocabulary) {
                    None => RuleVerdict::passed(rule.name(), severity),
                    Some(message) => {
                        tracing::debug!("Rule {} failed: {}", rule, message);
                        RuleVerdict::failed(rule.name(), severity, message)
                    }
                }
            })
            .collect()
    }

    /// The vocabulary this engine validates against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn header_failure() -> RuleVerdict {
        RuleVerdict::failed(
            HEADER_FORMAT_RULE,
            Severity::Error,
            r#"Header does not match the "type(scope): subject" format"#.to_string(),
        )
    }
}
