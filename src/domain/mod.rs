//! Domain types for docveil
//!
//! The error hierarchy and result alias shared by every layer.

pub mod errors;
pub mod result;

pub use errors::DocveilError;
pub use result::Result;
