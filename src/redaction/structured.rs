//! Structured-pattern redaction stage
//!
//! Scans text for the fixed catalogue of numeric and contact identifiers and
//! replaces every match with its category placeholder. Each rule performs a
//! whole-string search-and-replace over the output of the previous rule, so a
//! later rule never sees a substring an earlier rule has already replaced and
//! no position-indexed state survives between rules.

use crate::redaction::models::Detection;
use crate::redaction::rules::{CompiledRule, RuleSet};
use anyhow::{anyhow, Result};
use std::sync::Arc;

/// Structured-pattern redactor
///
/// Pure with respect to its input: unmatched text passes through unchanged
/// and the redactor holds no per-call state, so a single instance can be
/// shared across threads.
pub struct StructuredRedactor {
    rules: Arc<RuleSet>,
}

impl StructuredRedactor {
    /// Create a redactor with the built-in rule catalogue
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: Arc::new(RuleSet::builtin()?),
        })
    }

    /// Create a redactor with a custom rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Redact all structured identifiers in `text`
    pub fn redact(&self, text: &str) -> Result<String> {
        self.redact_with_detections(text).map(|(text, _)| text)
    }

    /// Redact all structured identifiers, returning what was replaced
    pub fn redact_with_detections(&self, text: &str) -> Result<(String, Vec<Detection>)> {
        let mut current = text.to_string();
        let mut detections = Vec::new();

        for rule in self.rules.rules() {
            current = apply_rule(rule, &current, &mut detections)?;
        }

        Ok((current, detections))
    }
}

/// Apply one rule as a full pass over `text`
fn apply_rule(rule: &CompiledRule, text: &str, detections: &mut Vec<Detection>) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let matched = rule
            .regex
            .find_from_pos(text, pos)
            .map_err(|e| anyhow!("Rule '{}' failed to execute: {e}", rule.name))?;

        let Some(m) = matched else { break };

        // A degenerate pattern could match the empty string; step over one
        // character instead of looping forever.
        if m.start() == m.end() {
            pos = next_char_boundary(text, m.end());
            continue;
        }

        out.push_str(&text[copied..m.start()]);
        out.push_str(rule.category.placeholder());
        detections.push(Detection::pattern(
            rule.category,
            m.as_str(),
            m.start(),
            m.end(),
        ));

        copied = m.end();
        pos = m.end();
    }

    out.push_str(&text[copied..]);
    Ok(out)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(text: &str) -> String {
        StructuredRedactor::new().unwrap().redact(text).unwrap()
    }

    #[test]
    fn test_tax_id_ten_digits() {
        assert_eq!(redact("1234567890"), "[TAX_ID]");
    }

    #[test]
    fn test_tax_id_twelve_digits() {
        assert_eq!(redact("123456789012"), "[TAX_ID]");
    }

    #[test]
    fn test_eleven_digit_run_is_not_tax_id() {
        // A contiguous mobile number falls through the fixed-length rules
        // and is picked up by the phone rule, trunk digit included.
        assert_eq!(redact("89161234567"), "[PHONE]");
    }

    #[test]
    fn test_digit_boundaries_respected() {
        // A 13-digit run must not yield a TAX_ID match on its first 10 digits.
        assert_eq!(redact("1234567890123"), "[REG_NUMBER]");
    }

    #[test]
    fn test_surrounding_text_untouched() {
        assert_eq!(
            redact("ИНН: 7707083893, далее по тексту"),
            "ИНН: [TAX_ID], далее по тексту"
        );
    }

    #[test]
    fn test_bank_routing_beats_generic_nine_digits() {
        assert_eq!(redact("044525225"), "[BANK_ROUTING]");
        assert_eq!(redact("772801001"), "[TAX_REG_CODE]");
    }

    #[test]
    fn test_corr_account_beats_generic_twenty_digits() {
        assert_eq!(redact("30101810400000000225"), "[CORR_ACCOUNT]");
        assert_eq!(redact("40702810900000005555"), "[ACCOUNT]");
    }

    #[test]
    fn test_email_embedded() {
        assert_eq!(
            redact("Направить на ivan.petrov@example.com, копия себе."),
            "Направить на [EMAIL], копия себе."
        );
    }

    #[test]
    fn test_detections_collected() {
        let redactor = StructuredRedactor::new().unwrap();
        let (text, detections) = redactor
            .redact_with_detections("ИНН 7707083893, почта a@b.ru")
            .unwrap();

        assert_eq!(text, "ИНН [TAX_ID], почта [EMAIL]");
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].original_value, "7707083893");
        assert_eq!(detections[1].original_value, "a@b.ru");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "ИНН 7707083893, ОГРН 1027700132195, СНИЛС 123-456-789 01",
            "счёт 40702810900000005555, БИК 044525225",
            "тел. +7 (495) 123-45-67, ivan@example.com",
        ];
        let redactor = StructuredRedactor::new().unwrap();
        for sample in samples {
            let once = redactor.redact(sample).unwrap();
            let twice = redactor.redact(&once).unwrap();
            assert_eq!(once, twice, "redaction not idempotent for: {sample}");
        }
    }
}
