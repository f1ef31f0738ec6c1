//! Result type alias for docveil

use super::errors::DocveilError;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, DocveilError>;
