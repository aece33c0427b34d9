// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CgConfig;

/// Get the default configuration.
pub fn default_config() -> CgConfig {
    CgConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# CG Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Header parsing
[header]
# Override the structural pattern. The `type`, `scope` and `subject`
# named groups are required.
# pattern = '^(?P<type>[a-z-]*)(?:\((?P<scope>[^)]+)\))?:\s?(?P<subject>.*)$'

# Vocabulary source
[vocab]
# Remote tag document. Comment out to use the built-in vocabularies.
# url = "https://raw.githubusercontent.com/example/changelog/main/tags.json"
timeout_secs = 10

# Rule severities: "error", "warning" or "disabled"
[rules]
type_enum = "error"
scope_enum = "error"
subject_case = "error"
subject_prefix = "error"

# CI behavior
[ci]
fail_on_warning = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    #[test]
    fn test_example_config_parses() {
        let config = parse_config(example_config()).unwrap();
        assert_eq!(config.vocab.timeout_secs, Some(10));
        assert!(!config.ci.fail_on_warning);
    }

    #[test]
    fn test_default_config_matches_schema_default() {
        let config = default_config();
        assert!(config.vocab.url.is_none());
    }
}
