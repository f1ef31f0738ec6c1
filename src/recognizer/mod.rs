//! Entity-recognition capability
//!
//! The NLP model that finds persons, organizations and locations is treated
//! as an opaque external dependency. It is constructed once at process
//! startup and injected into the redaction engine, never reached through
//! ambient global state, so tests can substitute a double and callers control
//! its lifecycle.

pub mod remote;

pub use remote::HttpRecognizer;

use thiserror::Error;

/// Kind of named entity returned by a recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Personal name
    Person,
    /// Organization name
    Organization,
    /// Location or address
    Location,
    /// Any other entity type; never redacted
    Other,
}

impl EntityKind {
    /// Map to the redaction category, if this kind is redacted at all
    pub fn category(&self) -> Option<crate::redaction::models::RedactionCategory> {
        use crate::redaction::models::RedactionCategory;
        match self {
            Self::Person => Some(RedactionCategory::Person),
            Self::Organization => Some(RedactionCategory::Organization),
            Self::Location => Some(RedactionCategory::Location),
            Self::Other => None,
        }
    }
}

/// Half-open byte-offset span `[start, stop)` into the recognized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpan {
    /// Start offset of the entity
    pub start: usize,
    /// End offset of the entity (exclusive)
    pub stop: usize,
    /// Entity kind
    pub kind: EntityKind,
}

impl EntitySpan {
    /// Create a new span
    pub fn new(start: usize, stop: usize, kind: EntityKind) -> Self {
        Self { start, stop, kind }
    }

    /// Check that the span addresses a well-formed substring of `text`.
    ///
    /// Offsets must be ordered, in bounds, and land on UTF-8 character
    /// boundaries.
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.start < self.stop
            && self.stop <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.stop)
    }
}

/// Recognizer failure, reported as a value rather than a panic so the entity
/// stage can degrade without unwinding
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// The backend could not be reached or refused the request
    #[error("recognizer backend unavailable: {0}")]
    Unavailable(String),

    /// The request itself failed in transit
    #[error("recognizer request failed: {0}")]
    Request(String),

    /// The backend answered with something the adapter could not decode
    #[error("invalid recognizer response: {0}")]
    InvalidResponse(String),
}

/// Entity-recognition capability.
///
/// Implementations must be safe for concurrent read-only use; an
/// implementation wrapping a model that is not thread-safe must serialize
/// access internally.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize all named entities in `text` in a single call
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;
}

/// Recognizer that finds nothing, used when the entity stage has no backend
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::RedactionCategory;

    #[test]
    fn test_kind_category_mapping() {
        assert_eq!(
            EntityKind::Person.category(),
            Some(RedactionCategory::Person)
        );
        assert_eq!(
            EntityKind::Organization.category(),
            Some(RedactionCategory::Organization)
        );
        assert_eq!(
            EntityKind::Location.category(),
            Some(RedactionCategory::Location)
        );
        assert_eq!(EntityKind::Other.category(), None);
    }

    #[test]
    fn test_span_validity() {
        let text = "ООО Ромашка"; // multi-byte Cyrillic
        assert!(EntitySpan::new(0, text.len(), EntityKind::Organization).is_valid_for(text));
        // inverted
        assert!(!EntitySpan::new(5, 2, EntityKind::Person).is_valid_for(text));
        // out of bounds
        assert!(!EntitySpan::new(0, text.len() + 1, EntityKind::Person).is_valid_for(text));
        // inside a multi-byte character
        assert!(!EntitySpan::new(1, 4, EntityKind::Person).is_valid_for(text));
    }

    #[test]
    fn test_noop_recognizer() {
        let spans = NoopRecognizer.recognize("Иванов Иван Иванович").unwrap();
        assert!(spans.is_empty());
    }
}
