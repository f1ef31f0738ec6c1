//! Redaction data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed enumeration of redaction categories.
///
/// Each category renders as a fixed placeholder literal (`[LABEL]`) that
/// replaces the matched span in the output text. The first eleven categories
/// are produced by the structured-pattern stage; the last three come from the
/// entity stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedactionCategory {
    /// Taxpayer identification number (10 or 12 digits)
    TaxId,
    /// State registration number of a legal entity (13 digits)
    RegNumber,
    /// State registration number of a sole proprietor (15 digits)
    RegNumberSoleProprietor,
    /// Tax registration reason code (9 digits)
    TaxRegCode,
    /// Bank routing identifier (9 digits, fixed prefix)
    BankRouting,
    /// Settlement account number (20 digits)
    Account,
    /// Correspondent account number (20 digits, fixed prefix)
    CorrAccount,
    /// Telephone number
    Phone,
    /// Email address
    Email,
    /// Passport series and number
    Passport,
    /// Personal insurance account number
    InsuranceNumber,
    /// Personal name
    Person,
    /// Organization name
    Organization,
    /// Location or address
    Location,
}

impl RedactionCategory {
    /// Human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaxId => "TAX_ID",
            Self::RegNumber => "REG_NUMBER",
            Self::RegNumberSoleProprietor => "REG_NUMBER_SOLE_PROPRIETOR",
            Self::TaxRegCode => "TAX_REG_CODE",
            Self::BankRouting => "BANK_ROUTING",
            Self::Account => "ACCOUNT",
            Self::CorrAccount => "CORR_ACCOUNT",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::Passport => "PASSPORT",
            Self::InsuranceNumber => "INSURANCE_NUMBER",
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Location => "LOCATION",
        }
    }

    /// Placeholder literal spliced into the output text
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::TaxId => "[TAX_ID]",
            Self::RegNumber => "[REG_NUMBER]",
            Self::RegNumberSoleProprietor => "[REG_NUMBER_SOLE_PROPRIETOR]",
            Self::TaxRegCode => "[TAX_REG_CODE]",
            Self::BankRouting => "[BANK_ROUTING]",
            Self::Account => "[ACCOUNT]",
            Self::CorrAccount => "[CORR_ACCOUNT]",
            Self::Phone => "[PHONE]",
            Self::Email => "[EMAIL]",
            Self::Passport => "[PASSPORT]",
            Self::InsuranceNumber => "[INSURANCE_NUMBER]",
            Self::Person => "[PERSON]",
            Self::Organization => "[ORGANIZATION]",
            Self::Location => "[LOCATION]",
        }
    }

    /// Whether this category is produced by the structured-pattern stage
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Person | Self::Organization | Self::Location)
    }
}

/// Stage that produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStage {
    /// Structured-pattern stage (regex catalogue)
    Pattern,
    /// Entity stage (NER recognizer)
    Entity,
}

/// A single redacted span.
///
/// Offsets are byte offsets into the text as it stood when the producing
/// stage ran, so they are meaningful for audit and reporting but must not be
/// re-applied to the final output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Redaction category
    pub category: RedactionCategory,
    /// Original matched text (hashed before it reaches any log)
    pub original_value: String,
    /// Start offset of the match
    pub start: usize,
    /// End offset of the match (exclusive)
    pub stop: usize,
    /// Stage that produced the detection
    pub stage: DetectionStage,
}

impl Detection {
    /// Create a detection produced by the structured-pattern stage
    pub fn pattern(category: RedactionCategory, value: &str, start: usize, stop: usize) -> Self {
        Self {
            category,
            original_value: value.to_string(),
            start,
            stop,
            stage: DetectionStage::Pattern,
        }
    }

    /// Create a detection produced by the entity stage
    pub fn entity(category: RedactionCategory, value: &str, start: usize, stop: usize) -> Self {
        Self {
            category,
            original_value: value.to_string(),
            start,
            stop,
            stage: DetectionStage::Entity,
        }
    }
}

/// Result of redacting one text unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedUnit {
    /// Identifier of the text unit within the document tree
    pub unit_id: String,
    /// Rewritten text
    pub text: String,
    /// Detections from both stages
    pub detections: Vec<Detection>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of redaction
    pub timestamp: DateTime<Utc>,
    /// Detection counts by category
    pub stats_by_category: HashMap<RedactionCategory, usize>,
}

impl RedactedUnit {
    /// Create a new redacted unit, computing per-category statistics
    pub fn new(
        unit_id: String,
        text: String,
        detections: Vec<Detection>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_category = HashMap::new();
        for detection in &detections {
            *stats_by_category.entry(detection.category).or_insert(0) += 1;
        }

        Self {
            unit_id,
            text,
            detections,
            processing_time_ms,
            timestamp: Utc::now(),
            stats_by_category,
        }
    }

    /// Total number of detections
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
