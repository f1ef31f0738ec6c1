//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types;
//! adapter failures are mapped to strings at the boundary.

use crate::document::ConversionError;
use crate::recognizer::RecognizerError;
use thiserror::Error;

/// Main docveil error type
#[derive(Debug, Error)]
pub enum DocveilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern rule compilation or execution errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Recognizer capability errors (construction only; recognition failures
    /// during a run are recovered by the entity stage)
    #[error("Recognizer error: {0}")]
    Recognizer(#[from] RecognizerError),

    /// Conversion chain errors
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Document walking/serialization errors
    #[error("Document error: {0}")]
    Document(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for DocveilError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
