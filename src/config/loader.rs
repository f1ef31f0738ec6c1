//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DocveilConfig, RecognizerMode};
use crate::config::secret::secret_from;
use crate::domain::errors::DocveilError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`DocveilConfig`]
/// 4. Applies environment variable overrides (`DOCVEIL_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, a
/// referenced environment variable is unset, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<DocveilConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocveilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DocveilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DocveilConfig = toml::from_str(&contents)
        .map_err(|e| DocveilError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        DocveilError::Configuration(format!("Configuration validation failed: {e:#}"))
    })?;

    Ok(config)
}

/// Load the configuration file if it exists, falling back to defaults
pub fn load_or_default(path: impl AsRef<Path>) -> Result<DocveilConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = DocveilConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            DocveilError::Configuration(format!("Configuration validation failed: {e:#}"))
        })?;
        Ok(config)
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`, skipping
/// comment lines
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let substituted = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing_vars.push(var_name.to_string());
                    String::new()
                }
            }
        });
        result.push_str(&substituted);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DocveilError::Configuration(format!(
            "Missing environment variables referenced in configuration: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `DOCVEIL_*` environment variable overrides
fn apply_env_overrides(config: &mut DocveilConfig) -> Result<()> {
    if let Ok(val) = std::env::var("DOCVEIL_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("DOCVEIL_RECOGNIZER_MODE") {
        config.recognizer.mode = match val.to_lowercase().as_str() {
            "remote" => RecognizerMode::Remote,
            "disabled" => RecognizerMode::Disabled,
            _ => {
                return Err(DocveilError::Configuration(format!(
                    "Invalid DOCVEIL_RECOGNIZER_MODE: {val}"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("DOCVEIL_RECOGNIZER_ENDPOINT") {
        config.recognizer.endpoint = Some(val);
    }

    if let Ok(val) = std::env::var("DOCVEIL_RECOGNIZER_API_TOKEN") {
        config.recognizer.api_token = Some(secret_from(val));
    }

    if let Ok(val) = std::env::var("DOCVEIL_RECOGNIZER_TIMEOUT_SECS") {
        config.recognizer.timeout_secs = val.parse().map_err(|_| {
            DocveilError::Configuration(format!("Invalid DOCVEIL_RECOGNIZER_TIMEOUT_SECS: {val}"))
        })?;
    }

    config
        .redaction
        .apply_env_overrides()
        .map_err(|e| DocveilError::Configuration(format!("{e:#}")))?;

    Ok(())
}
