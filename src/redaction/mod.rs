//! Redaction pipeline
//!
//! The core of docveil: a two-stage text-redaction engine. The
//! structured-pattern stage neutralizes numeric and contact identifiers with
//! an ordered regex catalogue; the entity stage then replaces recognized
//! persons, organizations and locations using an injected
//! [`EntityRecognizer`](crate::recognizer::EntityRecognizer) capability.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docveil::redaction::{RedactionConfig, RedactionEngine};
//!
//! let engine = RedactionEngine::new(&RedactionConfig::default(), recognizer)?;
//! let clean = engine.anonymize(paragraph)?;
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod entities;
pub mod models;
pub mod report;
pub mod rules;
pub mod structured;

// Re-export main types
pub use config::RedactionConfig;
pub use engine::RedactionEngine;
pub use models::{Detection, DetectionStage, RedactedUnit, RedactionCategory};
pub use report::RedactionReport;
