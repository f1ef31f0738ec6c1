//! Redaction engine
//!
//! Composes the two redaction stages in a fixed order: structured patterns
//! first, so numeric identifiers are neutralized before the entity recognizer
//! sees them, then named entities on the already-rewritten text. There is no
//! configuration point for reordering or disabling a stage.
//!
//! # Thread Safety
//!
//! The engine holds no per-call state and keeps its recognizer behind
//! `Arc<dyn EntityRecognizer>`, so one instance can be shared across threads.
//!
//! # Examples
//!
//! ```no_run
//! use docveil::redaction::{RedactionConfig, RedactionEngine};
//! use docveil::recognizer::NoopRecognizer;
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(&RedactionConfig::default(), Arc::new(NoopRecognizer))?;
//! let out = engine.anonymize("ИНН 7707083893")?;
//! assert_eq!(out, "ИНН [TAX_ID]");
//! # Ok(())
//! # }
//! ```

use crate::recognizer::EntityRecognizer;
use crate::redaction::{
    audit::AuditLogger,
    config::RedactionConfig,
    entities::EntityRedactor,
    models::RedactedUnit,
    rules::RuleSet,
    structured::StructuredRedactor,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;

/// Two-stage redaction engine
pub struct RedactionEngine {
    structured: StructuredRedactor,
    entities: EntityRedactor,
    recognizer: Arc<dyn EntityRecognizer>,
    audit_logger: Option<AuditLogger>,
}

impl RedactionEngine {
    /// Create an engine from configuration and an injected recognizer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the rule library
    /// cannot be loaded or compiled, or the audit logger cannot be set up.
    pub fn new(config: &RedactionConfig, recognizer: Arc<dyn EntityRecognizer>) -> Result<Self> {
        config
            .validate()
            .context("Invalid redaction configuration")?;

        let structured = if let Some(ref path) = config.rule_library {
            StructuredRedactor::with_rules(RuleSet::from_file(path)?)
        } else {
            StructuredRedactor::new()?
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            structured,
            entities: EntityRedactor::new(),
            recognizer,
            audit_logger,
        })
    }

    /// Create an engine with default configuration
    pub fn with_recognizer(recognizer: Arc<dyn EntityRecognizer>) -> Result<Self> {
        Self::new(&RedactionConfig::default(), recognizer)
    }

    /// Anonymize one text unit.
    ///
    /// Blank input short-circuits without invoking the recognizer. A
    /// recognizer failure degrades to the structured-stage output; it is
    /// never surfaced as an error.
    pub fn anonymize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let pass = self.structured.redact(text)?;
        Ok(self.entities.redact(&pass, self.recognizer.as_ref()))
    }

    /// Anonymize one text unit, returning detections, timing and statistics.
    ///
    /// `unit_id` identifies the unit's position within the document tree and
    /// ends up in the audit log.
    pub fn redact_unit(&self, unit_id: &str, text: &str) -> Result<RedactedUnit> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Ok(RedactedUnit::new(
                unit_id.to_string(),
                text.to_string(),
                Vec::new(),
                start.elapsed().as_millis() as u64,
            ));
        }

        let (pass, mut detections) = self.structured.redact_with_detections(text)?;
        let (out, entity_detections) = self
            .entities
            .redact_with_detections(&pass, self.recognizer.as_ref());
        detections.extend(entity_detections);

        let unit = RedactedUnit::new(
            unit_id.to_string(),
            out,
            detections,
            start.elapsed().as_millis() as u64,
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_unit(&unit)?;
        }

        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{EntityKind, EntitySpan, NoopRecognizer, RecognizerError};

    struct SubstringRecognizer {
        targets: Vec<(&'static str, EntityKind)>,
    }

    impl EntityRecognizer for SubstringRecognizer {
        fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Ok(self
                .targets
                .iter()
                .filter_map(|(needle, kind)| {
                    text.find(needle)
                        .map(|start| EntitySpan::new(start, start + needle.len(), *kind))
                })
                .collect())
        }
    }

    #[test]
    fn test_blank_input_short_circuits() {
        struct PanickingRecognizer;
        impl EntityRecognizer for PanickingRecognizer {
            fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
                panic!("recognizer must not be called for blank input");
            }
        }

        let engine = RedactionEngine::with_recognizer(Arc::new(PanickingRecognizer)).unwrap();
        assert_eq!(engine.anonymize("").unwrap(), "");
        assert_eq!(engine.anonymize("   ").unwrap(), "   ");
        assert_eq!(engine.anonymize("\t\n").unwrap(), "\t\n");
    }

    #[test]
    fn test_structured_then_entities() {
        let recognizer = SubstringRecognizer {
            targets: vec![("ООО Ромашка", EntityKind::Organization)],
        };
        let engine = RedactionEngine::with_recognizer(Arc::new(recognizer)).unwrap();

        let out = engine
            .anonymize("ООО Ромашка, ИНН 7707083893")
            .unwrap();
        assert_eq!(out, "[ORGANIZATION], ИНН [TAX_ID]");
    }

    #[test]
    fn test_redact_unit_merges_detections() {
        let recognizer = SubstringRecognizer {
            targets: vec![("Иванов", EntityKind::Person)],
        };
        let engine = RedactionEngine::with_recognizer(Arc::new(recognizer)).unwrap();

        let unit = engine
            .redact_unit("node-1", "Иванов, ИНН 7707083893")
            .unwrap();

        assert_eq!(unit.text, "[PERSON], ИНН [TAX_ID]");
        assert_eq!(unit.total_detections(), 2);
        assert_eq!(unit.unit_id, "node-1");
    }

    #[test]
    fn test_noop_recognizer_leaves_entities_alone() {
        let engine = RedactionEngine::with_recognizer(Arc::new(NoopRecognizer)).unwrap();
        let out = engine.anonymize("Иванов Иван Иванович").unwrap();
        assert_eq!(out, "Иванов Иван Иванович");
    }
}
