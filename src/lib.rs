// docveil - PII redaction for legal documents
// Copyright (c) 2025 Docveil Contributors
// Licensed under the MIT License

//! # docveil - PII redaction for legal documents
//!
//! docveil produces a sanitized copy of a legal document by running every
//! text unit through a two-stage redaction pipeline:
//!
//! - **Structured patterns**: an ordered regex catalogue replaces tax IDs,
//!   registration numbers, bank requisites, phone numbers, emails, passport
//!   and insurance numbers with category placeholders.
//! - **Named entities**: an injected recognizer capability finds persons,
//!   organizations and locations, and their spans are spliced out
//!   right-to-left against one snapshot of the text.
//!
//! The stages always run in that order, so numeric identifiers are
//! neutralized before the recognizer sees them. A recognizer failure never
//! loses a document: the entity stage logs and passes its input through.
//!
//! ## Architecture
//!
//! - [`redaction`] - The two-stage engine, rule catalogue, report and audit
//! - [`recognizer`] - Entity-recognition capability trait and HTTP adapter
//! - [`document`] - Document-tree walking and the conversion fallback chain
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration management
//! - [`domain`] - Error hierarchy and result alias
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docveil::recognizer::NoopRecognizer;
//! use docveil::redaction::{RedactionConfig, RedactionEngine};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(&RedactionConfig::default(), Arc::new(NoopRecognizer))?;
//!
//! let clean = engine.anonymize("ООО Ромашка, ИНН 7707083893, тел. +7 (495) 123-45-67")?;
//! assert_eq!(clean, "ООО Ромашка, ИНН [TAX_ID], тел. [PHONE]");
//! # Ok(())
//! # }
//! ```
//!
//! The recognizer is constructed once at process startup (model-backed
//! implementations are expensive to initialize) and injected wherever an
//! engine is built; nothing in the crate reaches for global state.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod logging;
pub mod recognizer;
pub mod redaction;
