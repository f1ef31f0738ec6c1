//! Entity redaction stage
//!
//! Replaces recognized person, organization and location spans with category
//! placeholders. All spans for a text unit come from one recognizer call and
//! refer to one snapshot of the string; replacements are spliced from the
//! rightmost span to the leftmost so earlier splices never shift the offsets
//! of spans still waiting to be applied.
//!
//! A recognizer failure is not allowed to lose the document: the stage logs
//! the error and returns its input unchanged.

use crate::recognizer::{EntityRecognizer, EntitySpan};
use crate::redaction::models::Detection;

/// Entity redactor
#[derive(Default)]
pub struct EntityRedactor;

impl EntityRedactor {
    /// Create a new entity redactor
    pub fn new() -> Self {
        Self
    }

    /// Redact recognized entities in `text`
    pub fn redact(&self, text: &str, recognizer: &dyn EntityRecognizer) -> String {
        self.redact_with_detections(text, recognizer).0
    }

    /// Redact recognized entities, returning what was replaced
    pub fn redact_with_detections(
        &self,
        text: &str,
        recognizer: &dyn EntityRecognizer,
    ) -> (String, Vec<Detection>) {
        let mut spans = match recognizer.recognize(text) {
            Ok(spans) => spans,
            Err(e) => {
                tracing::warn!(error = %e, "Entity recognition failed, leaving text unchanged");
                return (text.to_string(), Vec::new());
            }
        };

        // Kinds that are never redacted must not take part in overlap
        // resolution either.
        spans.retain(|span| span.kind.category().is_some());
        let spans = resolve_spans(text, spans);

        let mut out = text.to_string();
        let mut detections = Vec::with_capacity(spans.len());

        // Spans are sorted ascending by start; apply right-to-left.
        for span in spans.iter().rev() {
            let Some(category) = span.kind.category() else {
                continue;
            };

            detections.push(Detection::entity(
                category,
                &text[span.start..span.stop],
                span.start,
                span.stop,
            ));
            out.replace_range(span.start..span.stop, category.placeholder());
        }

        detections.reverse();
        (out, detections)
    }
}

/// Validate and de-overlap recognizer spans.
///
/// Malformed spans (inverted, out of bounds, or splitting a multi-byte
/// character) are dropped with a warning. Overlaps are resolved
/// deterministically: spans are ordered by start offset with the longest span
/// winning a tie, and any span overlapping an already-kept span is dropped.
fn resolve_spans(text: &str, mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    spans.retain(|span| {
        let valid = span.is_valid_for(text);
        if !valid {
            tracing::warn!(
                start = span.start,
                stop = span.stop,
                "Dropping malformed recognizer span"
            );
        }
        valid
    });

    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.stop.cmp(&a.stop)));

    let mut kept: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for span in spans {
        if span.start >= cursor {
            cursor = span.stop;
            kept.push(span);
        } else {
            tracing::debug!(
                start = span.start,
                stop = span.stop,
                "Dropping overlapping recognizer span"
            );
        }
    }
    kept
}
