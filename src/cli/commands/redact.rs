//! Redact command implementation

use crate::cli::commands::build_engine;
use crate::config::DocveilConfig;
use crate::document::{DocumentWalker, PlainTextDocument};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input document (plain text, one paragraph per line)
    pub input: PathBuf,

    /// Output path (defaults to `<stem>_redacted.<ext>` beside the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RedactArgs {
    /// Execute the redact command
    pub fn execute(&self, config: &DocveilConfig) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Redacting document");

        let engine = build_engine(config)?;
        let mut document = PlainTextDocument::from_file(&self.input)?;

        let summary = DocumentWalker::new(&engine).redact_document(&mut document)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input));
        document.write_to(&output)?;

        println!("Redacted {} -> {}", self.input.display(), output.display());
        println!(
            "Text units: {} processed, {} blank, {} detections",
            summary.nodes_visited,
            summary.nodes_skipped,
            summary.total_detections()
        );
        println!("Review the result before distributing it.");

        Ok(0)
    }
}

/// `contract.txt` becomes `contract_redacted.txt`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("txt");
    input.with_file_name(format!("{stem}_redacted.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/contract.txt")),
            PathBuf::from("/tmp/contract_redacted.txt")
        );
        assert_eq!(
            default_output_path(Path::new("claim.md")),
            PathBuf::from("claim_redacted.md")
        );
    }
}
