//! Conversion fallback chain
//!
//! A page-based container is preferably converted into the structured format
//! so the document walker can preserve layout. When that conversion fails the
//! request is not aborted: the chain falls back to raw per-page text
//! extraction, and only when both attempts fail does it report a terminal
//! error carrying both causes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conversion failure taxonomy
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Structural conversion into the editable format failed
    #[error("structural conversion failed: {0}")]
    Structural(String),

    /// Raw page-text extraction failed
    #[error("page text extraction failed: {0}")]
    Extraction(String),

    /// Both attempts failed; the request cannot proceed
    #[error("all conversion attempts failed (structural: {structural}; extraction: {extraction})")]
    Exhausted {
        /// Why structural conversion failed
        structural: String,
        /// Why page extraction failed
        extraction: String,
    },
}

/// Converts a page-based container into the structured format on disk
pub trait StructuralConverter: Send + Sync {
    /// Convert `input` into the structured format at `output`
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError>;
}

/// Extracts raw text per page, losing structure
pub trait PageTextExtractor: Send + Sync {
    /// Extract the text of every page of `input`, in page order
    fn extract_pages(&self, input: &Path) -> Result<Vec<String>, ConversionError>;
}

/// Result of a successful conversion attempt
#[derive(Debug)]
pub enum ConversionOutcome {
    /// Structural conversion succeeded; the converted file is at this path
    Structural(PathBuf),
    /// Fallback extraction succeeded; one string per page
    Pages(Vec<String>),
}

/// Ordered two-step conversion strategy
pub struct ConversionChain<'a> {
    converter: &'a dyn StructuralConverter,
    extractor: &'a dyn PageTextExtractor,
}

impl<'a> ConversionChain<'a> {
    /// Create a chain from its two capabilities
    pub fn new(
        converter: &'a dyn StructuralConverter,
        extractor: &'a dyn PageTextExtractor,
    ) -> Self {
        Self {
            converter,
            extractor,
        }
    }

    /// Run the chain: structural conversion first, page extraction second
    pub fn run(&self, input: &Path, scratch: &Path) -> Result<ConversionOutcome, ConversionError> {
        let structural_failure = match self.converter.convert(input, scratch) {
            Ok(()) => return Ok(ConversionOutcome::Structural(scratch.to_path_buf())),
            Err(e) => {
                tracing::warn!(
                    input = %input.display(),
                    error = %e,
                    "Structural conversion failed, falling back to page extraction"
                );
                e.to_string()
            }
        };

        match self.extractor.extract_pages(input) {
            Ok(pages) => Ok(ConversionOutcome::Pages(pages)),
            Err(e) => Err(ConversionError::Exhausted {
                structural: structural_failure,
                extraction: e.to_string(),
            }),
        }
    }
}
