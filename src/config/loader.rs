// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CgError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CgConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cg.toml", ".cg.toml", ".config/cg.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cg_config = config_dir.join("cg").join("config.toml");
        if cg_config.exists() {
            return Some(cg_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CgConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CgConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CgConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CgError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CgConfig> {
    toml::from_str(content).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert!(config.vocab.url.is_none());
        assert_eq!(config.rules.subject_prefix, Severity::Error);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[header]
pattern = '^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?: (?P<subject>.*)$'

[vocab]
url = "https://example.invalid/tags.json"
timeout_secs = 5

[rules]
subject_case = "warning"
subject_prefix = "disabled"

[ci]
fail_on_warning = true
"#;
        let config = parse_config(toml).unwrap();
        assert!(config.header.pattern.is_some());
        assert_eq!(
            config.vocab.url.as_deref(),
            Some("https://example.invalid/tags.json")
        );
        assert_eq!(config.vocab.timeout_secs, Some(5));
        assert_eq!(config.rules.subject_case, Severity::Warning);
        assert_eq!(config.rules.subject_prefix, Severity::Disabled);
        assert_eq!(config.rules.type_enum, Severity::Error);
        assert!(config.ci.fail_on_warning);
    }

    #[test]
    fn test_parse_invalid_severity() {
        let toml = r#"
[rules]
type_enum = "loud"
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/cg.toml"));
        assert!(matches!(
            result,
            Err(CgError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cg.toml");
        std::fs::write(&path, "[ci]\nfail_on_warning = true\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.ci.fail_on_warning);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".cg.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".cg.toml"));
    }
}
