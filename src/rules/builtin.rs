// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The built-in validation rules.
//!
//! The rule set is closed: every rule is a variant of [`RuleId`], checked
//! with an exhaustive match. A check returns `None` on pass and the
//! failure message on violation; severity handling lives in the engine.

use crate::commit::CommitHeader;
use crate::config::{RulesConfig, Severity};
use crate::vocab::Vocabulary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ticket prefix at (or near) the start of the subject, e.g. "BI-1234".
    static ref TICKET_REGEX: Regex = Regex::new(r"^\s*[A-Z]+-[0-9]+(?:[\s:]|$)").unwrap();

    /// A single PascalCase token covering the whole subject.
    static ref PASCAL_REGEX: Regex =
        Regex::new(r"^[A-Z][a-z0-9]*(?:[A-Z][a-z0-9]*)*$").unwrap();
}

/// The closed set of rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    TypeEnum,
    ScopeEnum,
    SubjectCase,
    SubjectPrefix,
}

impl RuleId {
    /// All rules in their fixed evaluation order. Report ordering mirrors
    /// this order.
    pub const ALL: [RuleId; 4] = [
        RuleId::TypeEnum,
        RuleId::ScopeEnum,
        RuleId::SubjectCase,
        RuleId::SubjectPrefix,
    ];

    /// The rule name used in verdicts and reports.
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::TypeEnum => "type-enum",
            RuleId::ScopeEnum => "scope-enum",
            RuleId::SubjectCase => "subject-case",
            RuleId::SubjectPrefix => "subject-prefix",
        }
    }

    /// The configured severity of this rule.
    pub fn severity(&self, config: &RulesConfig) -> Severity {
        match self {
            RuleId::TypeEnum => config.type_enum,
            RuleId::ScopeEnum => config.scope_enum,
            RuleId::SubjectCase => config.subject_case,
            RuleId::SubjectPrefix => config.subject_prefix,
        }
    }

    /// Check the rule against a parsed header. Returns `None` on pass,
    /// the failure message on violation.
    pub fn check(&self, header: &CommitHeader, vocabulary: &Vocabulary) -> Option<String> {
        match self {
            RuleId::TypeEnum => check_type_enum(header, vocabulary),
            RuleId::ScopeEnum => check_scope_enum(header, vocabulary),
            RuleId::SubjectCase => check_subject_case(header),
            RuleId::SubjectPrefix => check_subject_prefix(header),
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Type must be a member of the type vocabulary (case-sensitive).
fn check_type_enum(header: &CommitHeader, vocabulary: &Vocabulary) -> Option<String> {
    if vocabulary.allows_type(&header.commit_type) {
        None
    } else {
        Some(format!(
            "Type '{}' is not allowed. Allowed types: {}",
            header.commit_type,
            vocabulary.types.join(", ")
        ))
    }
}

/// Scope, when present, must be a member of the scope vocabulary.
fn check_scope_enum(header: &CommitHeader, vocabulary: &Vocabulary) -> Option<String> {
    match &header.scope {
        None => None,
        Some(scope) if vocabulary.allows_scope(scope) => None,
        Some(scope) => Some(format!(
            "Scope '{}' is not allowed. Allowed scopes: {}",
            scope,
            vocabulary.scopes.join(", ")
        )),
    }
}

/// The subject as a whole must not be start case, Pascal case or upper
/// case. This is a negative rule: the casings are violations.
fn check_subject_case(header: &CommitHeader) -> Option<String> {
    let subject = header.subject.as_str();

    if is_upper_case(subject) || is_start_case(subject) || is_pascal_case(subject) {
        Some("Subject must not be in start case, pascal case or upper case".to_string())
    } else {
        None
    }
}

/// The subject must be non-empty and carry a ticket prefix.
fn check_subject_prefix(header: &CommitHeader) -> Option<String> {
    if header.subject.trim().is_empty() {
        return Some("Subject must not be empty".to_string());
    }

    if TICKET_REGEX.is_match(&header.subject) {
        None
    } else {
        Some(r#"Subject must start with a prefix like "BI-1234""#.to_string())
    }
}

/// All letters uppercase, e.g. "FIX THE BUILD".
fn is_upper_case(s: &str) -> bool {
    s.chars().any(|c| c.is_alphabetic()) && !s.chars().any(|c| c.is_lowercase())
}

/// Every word begins with an uppercase letter, e.g. "Add New Feature".
fn is_start_case(s: &str) -> bool {
    let mut any_word = false;
    for word in s.split_whitespace() {
        if let Some(first) = word.chars().find(|c| c.is_alphabetic()) {
            any_word = true;
            if !first.is_uppercase() {
                return false;
            }
        }
    }
    any_word
}

/// One PascalCase token, e.g. "AddNewFeature".
fn is_pascal_case(s: &str) -> bool {
    PASCAL_REGEX.is_match(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(commit_type: &str, scope: Option<&str>, subject: &str) -> CommitHeader {
        CommitHeader {
            commit_type: commit_type.to_string(),
            scope: scope.map(|s| s.to_string()),
            subject: subject.to_string(),
        }
    }

    fn test_vocab() -> Vocabulary {
        Vocabulary::new(
            vec!["type-test".to_string()],
            vec!["scope-test".to_string()],
        )
    }

    #[test]
    fn test_type_enum_member() {
        let h = header("type-test", None, "BI-1 x");
        assert!(check_type_enum(&h, &test_vocab()).is_none());
    }

    #[test]
    fn test_type_enum_unknown_type() {
        let h = header("type", None, "BI-1 x");
        let message = check_type_enum(&h, &test_vocab()).unwrap();
        assert!(message.contains("'type'"));
        assert!(message.contains("type-test"));
    }

    #[test]
    fn test_type_enum_is_case_sensitive() {
        let h = header("Type-Test", None, "BI-1 x");
        assert!(check_type_enum(&h, &test_vocab()).is_some());
    }

    #[test]
    fn test_scope_enum_absent_scope_passes() {
        let h = header("type-test", None, "BI-1 x");
        assert!(check_scope_enum(&h, &test_vocab()).is_none());
    }

    #[test]
    fn test_scope_enum_member() {
        let h = header("type-test", Some("scope-test"), "BI-1 x");
        assert!(check_scope_enum(&h, &test_vocab()).is_none());
    }

    #[test]
    fn test_scope_enum_unknown_scope() {
        let h = header("type-test", Some("kitchen"), "BI-1 x");
        let message = check_scope_enum(&h, &test_vocab()).unwrap();
        assert!(message.contains("'kitchen'"));
        assert!(message.contains("scope-test"));
    }

    #[test]
    fn test_subject_case_plain_subject_passes() {
        let h = header("type-test", None, "BI-123 add new feature");
        assert!(check_subject_case(&h).is_none());
    }

    #[test]
    fn test_subject_case_sentence_case_passes() {
        // Only start/pascal/upper case are violations.
        let h = header("type-test", None, "Fix the broken chart legend");
        assert!(check_subject_case(&h).is_none());
    }

    #[test]
    fn test_subject_case_rejects_upper_case() {
        let h = header("type-test", None, "FIX THE BUILD");
        assert!(check_subject_case(&h).is_some());
    }

    #[test]
    fn test_subject_case_rejects_start_case() {
        let h = header("type-test", None, "Add New Feature");
        assert!(check_subject_case(&h).is_some());
    }

    #[test]
    fn test_subject_case_rejects_pascal_case() {
        let h = header("type-test", None, "AddNewFeature");
        assert!(check_subject_case(&h).is_some());
    }

    #[test]
    fn test_subject_case_empty_subject_passes() {
        // Emptiness belongs to subject-prefix.
        let h = header("type-test", None, "");
        assert!(check_subject_case(&h).is_none());
    }

    #[test]
    fn test_subject_prefix_with_ticket() {
        let h = header("type-test", None, "BI-123 add new feature");
        assert!(check_subject_prefix(&h).is_none());
    }

    #[test]
    fn test_subject_prefix_empty_subject() {
        let h = header("type-test", None, "");
        assert_eq!(
            check_subject_prefix(&h).unwrap(),
            "Subject must not be empty"
        );
    }

    #[test]
    fn test_subject_prefix_whitespace_subject_is_empty() {
        let h = header("type-test", None, "   ");
        assert_eq!(
            check_subject_prefix(&h).unwrap(),
            "Subject must not be empty"
        );
    }

    #[test]
    fn test_subject_prefix_missing_ticket() {
        let h = header("type-test", None, "add new feature");
        assert_eq!(
            check_subject_prefix(&h).unwrap(),
            r#"Subject must start with a prefix like "BI-1234""#
        );
    }

    #[test]
    fn test_subject_prefix_lowercase_ticket_rejected() {
        let h = header("type-test", None, "bi-123 add new feature");
        assert!(check_subject_prefix(&h).is_some());
    }

    #[test]
    fn test_subject_prefix_ticket_needs_digits() {
        let h = header("type-test", None, "BI- add new feature");
        assert!(check_subject_prefix(&h).is_some());
    }

    #[test]
    fn test_subject_prefix_ticket_must_be_delimited() {
        let h = header("type-test", None, "BI-123abc glued to the ticket");
        assert!(check_subject_prefix(&h).is_some());
    }

    #[test]
    fn test_subject_prefix_tolerates_leading_whitespace() {
        let h = header("type-test", None, " BI-42 double separator space");
        assert!(check_subject_prefix(&h).is_none());
    }

    #[test]
    fn test_rule_names() {
        let names: Vec<&str> = RuleId::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["type-enum", "scope-enum", "subject-case", "subject-prefix"]
        );
    }

    #[test]
    fn test_rule_severity_lookup() {
        let mut config = RulesConfig::default();
        config.subject_case = Severity::Warning;
        assert_eq!(RuleId::SubjectCase.severity(&config), Severity::Warning);
        assert_eq!(RuleId::TypeEnum.severity(&config), Severity::Error);
    }

    #[test]
    fn test_case_detectors() {
        assert!(is_upper_case("ALL CAPS 123"));
        assert!(!is_upper_case("Mixed Case"));
        assert!(!is_upper_case("123 456"));

        assert!(is_start_case("Every Word Capitalized"));
        assert!(is_start_case("Fix"));
        assert!(!is_start_case("BI-1234 add feature"));
        assert!(!is_start_case(""));

        assert!(is_pascal_case("AddNewFeature"));
        assert!(!is_pascal_case("Add new feature"));
        assert!(!is_pascal_case("addNewFeature"));
    }
}
