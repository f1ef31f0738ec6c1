//! CLI command implementations

pub mod inspect;
pub mod redact;
pub mod validate;

use crate::config::{DocveilConfig, RecognizerMode};
use crate::recognizer::{EntityRecognizer, HttpRecognizer, NoopRecognizer};
use crate::redaction::RedactionEngine;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Build the redaction engine with the recognizer the configuration asks for
pub fn build_engine(config: &DocveilConfig) -> Result<RedactionEngine> {
    let recognizer: Arc<dyn EntityRecognizer> = match config.recognizer.mode {
        RecognizerMode::Remote => {
            let recognizer = HttpRecognizer::from_config(&config.recognizer)
                .context("Failed to construct remote recognizer")?;
            Arc::new(recognizer)
        }
        RecognizerMode::Disabled => {
            tracing::info!("Entity recognizer disabled; only structured patterns are redacted");
            Arc::new(NoopRecognizer)
        }
    };

    RedactionEngine::new(&config.redaction, recognizer)
        .context("Failed to construct redaction engine")
}
