//! Document walking
//!
//! Drives the redaction engine over every text-bearing node of a document
//! tree, rewriting node text in place so surrounding structure and formatting
//! survive. Nodes whose text is empty or whitespace-only are skipped without
//! touching the engine.

use crate::redaction::{RedactionEngine, RedactionReport};
use anyhow::Result;

/// A document exposed as a tree of text-bearing nodes.
///
/// Container-format codecs implement this to hand their paragraph and
/// table-cell text to the walker; node identity stays with the
/// implementation.
pub trait DocumentTree {
    /// Visit every text-bearing node in document order. The string returned
    /// by `visit` replaces the node's text.
    fn rewrite_text_nodes(
        &mut self,
        visit: &mut dyn FnMut(&str) -> Result<String>,
    ) -> Result<()>;
}

/// Summary of one document walk
#[derive(Debug)]
pub struct WalkSummary {
    /// Text-bearing nodes seen
    pub nodes_visited: usize,
    /// Nodes skipped because their text was blank
    pub nodes_skipped: usize,
    /// Aggregate detection report across all redacted nodes
    pub report: RedactionReport,
}

impl WalkSummary {
    /// Total detections across the document
    pub fn total_detections(&self) -> usize {
        self.report.total_detections
    }
}

/// Applies a redaction engine to every node of a document tree
pub struct DocumentWalker<'a> {
    engine: &'a RedactionEngine,
}

impl<'a> DocumentWalker<'a> {
    /// Create a walker over the given engine
    pub fn new(engine: &'a RedactionEngine) -> Self {
        Self { engine }
    }

    /// Redact every text-bearing node of `document` in place
    pub fn redact_document(&self, document: &mut dyn DocumentTree) -> Result<WalkSummary> {
        let mut nodes_visited = 0;
        let mut nodes_skipped = 0;
        let mut report = RedactionReport::new();

        document.rewrite_text_nodes(&mut |text| {
            nodes_visited += 1;

            if text.trim().is_empty() {
                nodes_skipped += 1;
                return Ok(text.to_string());
            }

            let unit = self
                .engine
                .redact_unit(&format!("node-{nodes_visited}"), text)?;
            report.add_unit(&unit);
            Ok(unit.text)
        })?;

        tracing::info!(
            nodes_visited,
            nodes_skipped,
            detections = report.total_detections,
            "Document walk complete"
        );

        Ok(WalkSummary {
            nodes_visited,
            nodes_skipped,
            report,
        })
    }
}

/// Plain-text document: one text unit per line.
///
/// Used by the CLI path and as the assembly target for the page-extraction
/// fallback, where each extracted page becomes one line-delimited block.
#[derive(Debug)]
pub struct PlainTextDocument {
    lines: Vec<String>,
}

impl PlainTextDocument {
    /// Build a document from raw text content
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from page texts, one block per page
    pub fn from_pages(pages: &[String]) -> Self {
        Self::from_content(&pages.join("\n\n"))
    }

    /// Read a document from a file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        Ok(Self::from_content(&content))
    }

    /// Render the document back to text
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the document to a file
    pub fn write_to(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.render())
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))
    }

    /// Number of lines (text units) in the document
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl DocumentTree for PlainTextDocument {
    fn rewrite_text_nodes(
        &mut self,
        visit: &mut dyn FnMut(&str) -> Result<String>,
    ) -> Result<()> {
        for line in &mut self.lines {
            let rewritten = visit(line)?;
            *line = rewritten;
        }
        Ok(())
    }
}
