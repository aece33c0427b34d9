// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdict and outcome types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::style;

/// The pass/fail result of one rule against one commit header.
#[derive(Debug, Clone)]
pub struct RuleVerdict {
    /// Rule name for programmatic handling.
    pub rule: &'static str,
    /// Severity the rule was evaluated at.
    pub severity: Severity,
    /// Whether the rule passed.
    pub passed: bool,
    /// Human-readable failure message (empty on pass).
    pub message: String,
}

impl RuleVerdict {
    /// A passing verdict.
    pub fn passed(rule: &'static str, severity: Severity) -> Self {
        Self {
            rule,
            severity,
            passed: true,
            message: String::new(),
        }
    }

    /// A failing verdict with its message.
    pub fn failed(rule: &'static str, severity: Severity, message: String) -> Self {
        Self {
            rule,
            severity,
            passed: false,
            message,
        }
    }

    /// Format the verdict for terminal output.
    pub fn format(&self) -> String {
        let prefix = match self.severity {
            Severity::Error => style("✗").red().bold(),
            _ => style("⚠").yellow().bold(),
        };

        format!(
            "{} {} {}",
            prefix,
            style(self.rule).dim(),
            self.message
        )
    }
}

/// Terminal artifact of one validation run.
#[derive(Debug, Clone)]
pub struct LintOutcome {
    /// Whether the message passed every error-severity rule.
    pub valid: bool,
    /// Failing error-severity verdicts, in rule order.
    pub errors: Vec<RuleVerdict>,
    /// Failing warning-severity verdicts, in rule order.
    pub warnings: Vec<RuleVerdict>,
    /// The raw input message.
    pub input: String,
}

impl LintOutcome {
    /// Aggregate verdicts into an outcome. Validity is the conjunction of
    /// all error-severity verdicts; warning failures never flip it.
    pub fn from_verdicts(input: String, verdicts: Vec<RuleVerdict>) -> Self {
        let valid = !verdicts
            .iter()
            .any(|v| v.severity == Severity::Error && !v.passed);

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for verdict in verdicts {
            if verdict.passed {
                continue;
            }
            match verdict.severity {
                Severity::Error => errors.push(verdict),
                Severity::Warning => warnings.push(verdict),
                Severity::Disabled => {}
            }
        }

        Self {
            valid,
            errors,
            warnings,
            input,
        }
    }

    /// Get the total number of reported failures.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Render the outcome as display text: one line per failure followed
    /// by a summary count, or a single confirmation for a clean run.
    pub fn render(&self) -> String {
        if self.valid && self.warnings.is_empty() {
            return format!("{} commit message passes all checks", style("✓").green().bold());
        }

        let mut lines = Vec::new();
        for error in &self.errors {
            lines.push(error.format());
        }
        for warning in &self.warnings {
            lines.push(warning.format());
        }
        lines.push(format!(
            "found {} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        ));
        lines.join("\n")
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => println!("{}", self.render()),
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let verdict_json = |v: &RuleVerdict| {
            serde_json::json!({
                "rule": v.rule,
                "severity": v.severity.as_str(),
                "message": v.message,
            })
        };

        let json = serde_json::json!({
            "valid": self.valid,
            "input": self.input,
            "errors": self.errors.iter().map(verdict_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(verdict_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.valid {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
