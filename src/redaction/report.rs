//! Aggregate reporting across redacted text units
//!
//! Used by the `inspect` command and by the document walker to summarize a
//! whole document run: detection counts by category, a handful of truncated
//! before/after samples, and timing statistics.

use crate::redaction::models::{DetectionStage, RedactedUnit, RedactionCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

const MAX_SAMPLES: usize = 20;
const SAMPLE_TRUNCATE_CHARS: usize = 48;

/// Detection statistics for a document run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Total text units processed
    pub total_units: usize,

    /// Total detections across both stages
    pub total_detections: usize,

    /// Detections by category
    pub detections_by_category: HashMap<RedactionCategory, usize>,

    /// Sample redactions (original values truncated)
    pub samples: Vec<RedactionSample>,

    /// Warnings accumulated during the run
    pub warnings: Vec<String>,

    /// Units that contained at least one detection
    pub units_with_detections: usize,

    /// Total processing time in milliseconds
    pub total_processing_time_ms: u64,
}

/// One sample redaction showing the replacement made
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSample {
    /// Original value, truncated for display
    pub original: String,
    /// Placeholder it was replaced with
    pub replacement: String,
    /// Redaction category
    pub category: RedactionCategory,
    /// Stage that produced the detection
    pub stage: DetectionStage,
}

impl RedactionReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            total_units: 0,
            total_detections: 0,
            detections_by_category: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            units_with_detections: 0,
            total_processing_time_ms: 0,
        }
    }

    /// Fold one redacted unit into the report
    pub fn add_unit(&mut self, unit: &RedactedUnit) {
        self.total_units += 1;
        self.total_processing_time_ms += unit.processing_time_ms;

        if unit.detections.is_empty() {
            return;
        }

        self.units_with_detections += 1;
        self.total_detections += unit.detections.len();

        for detection in &unit.detections {
            *self
                .detections_by_category
                .entry(detection.category)
                .or_insert(0) += 1;

            if self.samples.len() < MAX_SAMPLES {
                self.samples.push(RedactionSample {
                    original: truncate_chars(&detection.original_value, SAMPLE_TRUNCATE_CHARS),
                    replacement: detection.category.placeholder().to_string(),
                    category: detection.category,
                    stage: detection.stage,
                });
            }
        }
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Average processing time per unit in milliseconds
    pub fn avg_processing_time_ms(&self) -> u64 {
        if self.total_units == 0 {
            0
        } else {
            self.total_processing_time_ms / self.total_units as u64
        }
    }

    /// Render the report for terminal output
    pub fn render(&self) -> String {
        let mut out = String::new();

        writeln!(out, "Redaction Report").unwrap();
        writeln!(out, "================").unwrap();
        writeln!(out, "Text units processed: {}", self.total_units).unwrap();
        writeln!(
            out,
            "Units with detections: {}",
            self.units_with_detections
        )
        .unwrap();
        writeln!(out, "Total detections: {}", self.total_detections).unwrap();

        if !self.detections_by_category.is_empty() {
            writeln!(out).unwrap();
            writeln!(out, "Detections by category:").unwrap();

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then(a.0.label().cmp(b.0.label())));
            for (category, count) in categories {
                writeln!(out, "  {:<28} {}", category.label(), count).unwrap();
            }
        }

        if !self.samples.is_empty() {
            writeln!(out).unwrap();
            writeln!(out, "Samples:").unwrap();
            for sample in &self.samples {
                writeln!(out, "  {} -> {}", sample.original, sample.replacement).unwrap();
            }
        }

        if !self.warnings.is_empty() {
            writeln!(out).unwrap();
            writeln!(out, "Warnings:").unwrap();
            for warning in &self.warnings {
                writeln!(out, "  {warning}").unwrap();
            }
        }

        writeln!(
            out,
            "\nProcessing time: {}ms total, {}ms avg per unit",
            self.total_processing_time_ms,
            self.avg_processing_time_ms()
        )
        .unwrap();

        out
    }
}

impl Default for RedactionReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate on character boundaries; original values are often Cyrillic
fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let truncated: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{truncated}...")
}
