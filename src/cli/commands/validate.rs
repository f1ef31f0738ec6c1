//! Validate config command implementation

use crate::config::{load_config, RecognizerMode};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        match config.recognizer.mode {
            RecognizerMode::Remote => {
                println!("  Recognizer: remote");
                println!(
                    "  Recognizer Endpoint: {}",
                    config.recognizer.endpoint.as_deref().unwrap_or("-")
                );
                println!(
                    "  Recognizer Token: {}",
                    if config.recognizer.api_token.is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
            }
            RecognizerMode::Disabled => {
                println!("  Recognizer: disabled (structured patterns only)");
            }
        }
        match config.redaction.rule_library {
            Some(ref path) => println!("  Rule Library: {}", path.display()),
            None => println!("  Rule Library: built-in"),
        }
        println!(
            "  Audit Log: {}",
            if config.redaction.audit.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        Ok(0)
    }
}
