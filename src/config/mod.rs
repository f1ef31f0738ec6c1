//! Configuration management for docveil
//!
//! TOML-based configuration with environment variable substitution
//! (`${VAR_NAME}`), `DOCVEIL_*` overrides, defaults for every section, and
//! validation on load. The recognizer API token is carried as a
//! [`SecretString`] so it never shows up in Debug output or logs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docveil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docveil.toml")?;
//! println!("recognizer mode: {:?}", config.recognizer.mode);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_or_default};
pub use schema::{
    ApplicationConfig, DocveilConfig, LoggingConfig, RecognizerConfig, RecognizerMode,
};
pub use secret::{secret_from, SecretString, SecretValue};
