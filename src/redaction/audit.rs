//! Audit logger for redaction operations
//!
//! Records what was redacted per text unit without ever writing plaintext
//! PII: original values appear only as SHA-256 hashes.

use crate::redaction::models::{Detection, RedactedUnit};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one text unit
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    unit_id: String,
    detections_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    stage: String,
    /// SHA-256 hash of the original value; plaintext PII never reaches the log
    value_hash: String,
}

/// Audit logger for redaction operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a redacted text unit
    pub fn log_unit(&self, unit: &RedactedUnit) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: unit.timestamp.to_rfc3339(),
            unit_id: unit.unit_id.clone(),
            detections_count: unit.detections.len(),
            processing_time_ms: unit.processing_time_ms,
            detections: unit
                .detections
                .iter()
                .map(Self::create_audit_detection)
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(detection: &Detection) -> AuditDetection {
        AuditDetection {
            category: detection.category.label().to_string(),
            stage: format!("{:?}", detection.stage),
            value_hash: hash_value(&detection.original_value),
        }
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Unit: {} | Detections: {} | Time: {}ms",
                entry.timestamp, entry.unit_id, entry.detections_count, entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
