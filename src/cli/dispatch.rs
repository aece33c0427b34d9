// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::config::CgConfig;
use crate::error::{CgError, LintError, Result, ResultExt};
use crate::lint::Linter;

use super::args::{CheckArgs, Cli, Commands, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CgConfig::load_from(config_path)?
    } else {
        CgConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Vocab => run_vocab(&cli, &config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CgConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let linter = Linter::new(config)?;
    let message = read_message(&args)?;

    let outcome = linter.validate(&message);
    outcome.print(cli.format);

    let strict = cli.strict || config.ci.fail_on_warning;
    if !outcome.valid || (strict && !outcome.warnings.is_empty()) {
        return Err(CgError::Lint(LintError::MessageRejected {
            errors: outcome.errors.len(),
            warnings: outcome.warnings.len(),
        }));
    }

    Ok(())
}

/// Resolve the raw message from argument, file, or stdin.
fn read_message(args: &CheckArgs) -> Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .context(format!("Failed to read message file {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Err(CgError::Lint(LintError::MissingMessage));
    }
    Ok(buffer)
}

/// Run the vocab command.
fn run_vocab(cli: &Cli, config: &CgConfig) -> Result<()> {
    use crate::vocab::Vocabulary;

    tracing::debug!("Running vocab command");

    let vocabulary = Vocabulary::load(&config.vocab);

    match cli.format {
        Some(OutputFormat::Json) => {
            let json = serde_json::json!({
                "types": vocabulary.types,
                "scopes": vocabulary.scopes,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            println!("types:");
            for t in &vocabulary.types {
                println!("  {}", t);
            }
            println!("scopes:");
            for s in &vocabulary.scopes {
                println!("  {}", s);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cg {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cg.toml");

    if config_path.exists() && !args.force {
        return Err(CgError::Config(crate::error::ConfigError::InvalidValue {
            key: "cg.toml".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        }));
    }

    std::fs::write(config_path, example_config())?;
    println!("✓ Wrote cg.toml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_message_from_argument() {
        let args = CheckArgs {
            message: Some("dev: BI-1 x".to_string()),
            file: None,
        };
        assert_eq!(read_message(&args).unwrap(), "dev: BI-1 x");
    }

    #[test]
    fn test_read_message_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "tests(auth): BI-9 cover login\n").unwrap();

        let args = CheckArgs {
            message: None,
            file: Some(path),
        };
        assert_eq!(read_message(&args).unwrap(), "tests(auth): BI-9 cover login\n");
    }

    #[test]
    fn test_read_message_from_missing_file() {
        let args = CheckArgs {
            message: None,
            file: Some(std::path::PathBuf::from("/nonexistent/COMMIT_EDITMSG")),
        };
        assert!(read_message(&args).is_err());
    }
}
