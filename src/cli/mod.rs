//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for docveil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// docveil - PII redaction for legal documents
#[derive(Parser, Debug)]
#[command(name = "docveil")]
#[command(version, about, long_about = None)]
#[command(author = "Docveil Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docveil.toml", env = "DOCVEIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCVEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact a document and write the sanitized copy
    Redact(commands::redact::RedactArgs),

    /// Detect PII without rewriting anything and print a report
    Inspect(commands::inspect::InspectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_redact() {
        let cli = Cli::parse_from(["docveil", "redact", "contract.txt"]);
        assert_eq!(cli.config, "docveil.toml");
        assert!(matches!(cli.command, Commands::Redact(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["docveil", "--config", "custom.toml", "inspect", "a.txt"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["docveil", "--log-level", "debug", "redact", "a.txt"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["docveil", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_redact_with_output() {
        let cli = Cli::parse_from(["docveil", "redact", "in.txt", "--output", "out.txt"]);
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.output.unwrap().to_str().unwrap(), "out.txt");
            }
            _ => panic!("expected redact command"),
        }
    }
}
