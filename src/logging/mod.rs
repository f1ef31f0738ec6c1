//! Logging and observability
//!
//! Structured logging built on `tracing`: console output for interactive
//! use, optional rotating JSON file output for service deployments.

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};
