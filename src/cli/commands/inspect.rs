//! Inspect command implementation
//!
//! Dry-run over a document: runs the full pipeline in memory, discards the
//! rewritten text, and prints the detection report.

use crate::cli::commands::build_engine;
use crate::config::DocveilConfig;
use crate::document::{DocumentWalker, PlainTextDocument};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input document (plain text, one paragraph per line)
    pub input: PathBuf,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &DocveilConfig) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Inspecting document");

        let engine = build_engine(config)?;
        let mut document = PlainTextDocument::from_file(&self.input)?;

        // The rewritten document stays in memory; nothing is written back.
        let summary = DocumentWalker::new(&engine).redact_document(&mut document)?;

        println!("{}", summary.report.render());

        Ok(0)
    }
}
