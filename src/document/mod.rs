//! Document handling
//!
//! The redaction core never parses container formats itself; codecs expose
//! their text-bearing nodes through [`DocumentTree`] and the walker rewrites
//! them in place. The conversion chain models the fallback from structural
//! conversion to raw page-text extraction.

pub mod convert;
pub mod walker;

pub use convert::{
    ConversionChain, ConversionError, ConversionOutcome, PageTextExtractor, StructuralConverter,
};
pub use walker::{DocumentTree, DocumentWalker, PlainTextDocument, WalkSummary};
