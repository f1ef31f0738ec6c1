//! Configuration schema types

use crate::config::secret::SecretString;
use crate::redaction::RedactionConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Top-level docveil configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocveilConfig {
    /// Application settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Entity-recognition capability settings
    #[serde(default)]
    pub recognizer: RecognizerConfig,

    /// Redaction engine settings
    #[serde(default)]
    pub redaction: RedactionConfig,
}

impl DocveilConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.application
            .validate()
            .context("Invalid [application] section")?;
        self.recognizer
            .validate()
            .context("Invalid [recognizer] section")?;
        self.redaction
            .validate()
            .context("Invalid [redaction] section")?;
        Ok(())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "docveil".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => anyhow::bail!("Unknown log level: {other}"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

/// How the entity-recognition capability is provided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerMode {
    /// Remote NER inference service over HTTP
    Remote,
    /// No entity stage backend; only structured patterns are redacted
    #[default]
    Disabled,
}

/// Entity-recognition capability settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Capability mode
    #[serde(default)]
    pub mode: RecognizerMode,

    /// Inference service endpoint (required in remote mode)
    pub endpoint: Option<String>,

    /// Bearer token for the inference service
    pub api_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_recognizer_timeout")]
    pub timeout_secs: u64,
}

fn default_recognizer_timeout() -> u64 {
    30
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            mode: RecognizerMode::default(),
            endpoint: None,
            api_token: None,
            timeout_secs: default_recognizer_timeout(),
        }
    }
}

impl RecognizerConfig {
    fn validate(&self) -> Result<()> {
        if self.mode == RecognizerMode::Remote {
            let endpoint = self
                .endpoint
                .as_deref()
                .context("recognizer.endpoint is required in remote mode")?;
            Url::parse(endpoint)
                .with_context(|| format!("Invalid recognizer endpoint: {endpoint}"))?;
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("recognizer.timeout_secs must be greater than zero");
        }

        Ok(())
    }
}
