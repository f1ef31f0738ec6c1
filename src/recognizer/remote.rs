//! HTTP adapter for a remote NER inference service
//!
//! The recognizer model is expensive to initialize and lives behind an
//! inference endpoint; this adapter turns one `recognize` call into one
//! blocking HTTP round trip. The wire format follows the tagging service:
//! `POST {"text": ...}` answered with `{"spans": [{"start", "stop", "type"}]}`
//! where `type` is one of the `PER` / `ORG` / `LOC` tags (anything else maps
//! to [`EntityKind::Other`]).

use super::{EntityKind, EntityRecognizer, EntitySpan, RecognizerError};
use crate::config::{RecognizerConfig, SecretString};
use crate::domain::{DocveilError, Result};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    spans: Vec<SpanPayload>,
}

#[derive(Debug, Deserialize)]
struct SpanPayload {
    start: usize,
    stop: usize,
    #[serde(rename = "type")]
    kind: String,
}

/// Blocking HTTP client for a remote entity-recognition service
pub struct HttpRecognizer {
    client: reqwest::blocking::Client,
    endpoint: Url,
    api_token: Option<SecretString>,
}

impl HttpRecognizer {
    /// Create a recognizer for the given endpoint
    pub fn new(endpoint: &str, api_token: Option<SecretString>, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            DocveilError::Configuration(format!("Invalid recognizer endpoint '{endpoint}': {e}"))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DocveilError::Configuration(format!("Failed to build recognizer client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    /// Create a recognizer from the `[recognizer]` configuration section
    pub fn from_config(config: &RecognizerConfig) -> Result<Self> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            DocveilError::Configuration(
                "Recognizer endpoint is required in remote mode".to_string(),
            )
        })?;

        Self::new(
            endpoint,
            config.api_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn parse_kind(tag: &str) -> EntityKind {
        match tag {
            "PER" => EntityKind::Person,
            "ORG" => EntityKind::Organization,
            "LOC" => EntityKind::Location,
            _ => EntityKind::Other,
        }
    }
}

impl EntityRecognizer for HttpRecognizer {
    fn recognize(&self, text: &str) -> std::result::Result<Vec<EntitySpan>, RecognizerError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&RecognizeRequest { text });

        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token.expose_secret().as_ref());
        }

        let response = request
            .send()
            .map_err(|e| RecognizerError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognizerError::Unavailable(format!(
                "recognizer answered with status {status}"
            )));
        }

        let body: RecognizeResponse = response
            .json()
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;

        Ok(body
            .spans
            .into_iter()
            .map(|s| EntitySpan::new(s.start, s.stop, Self::parse_kind(&s.kind)))
            .collect())
    }
}
