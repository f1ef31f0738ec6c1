// docveil - PII redaction for legal documents
// Copyright (c) 2025 Docveil Contributors
// Licensed under the MIT License

use clap::Parser;
use docveil::cli::{Cli, Commands};
use docveil::config::{load_or_default, LoggingConfig};
use docveil::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI; file logging is a service concern.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    };
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "docveil - PII redaction for legal documents"
    );

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            1
        }
    };

    process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Redact(args) => {
            let config = load_or_default(&cli.config)?;
            args.execute(&config)
        }
        Commands::Inspect(args) => {
            let config = load_or_default(&cli.config)?;
            args.execute(&config)
        }
    }
}
