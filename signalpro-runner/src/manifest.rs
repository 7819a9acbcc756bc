//! Batch manifest export (JSON) and summary CSV.
//!
//! The manifest lists every rendered signal with its output path and byte
//! size, plus any failures — the record downstream deployment tooling reads.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::batch::BatchOutcome;
use crate::export::WrittenArtifact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub ticker: String,
    pub category: String,
    pub path: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    pub ticker: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchManifest {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ManifestEntry>,
    pub failures: Vec<FailureEntry>,
}

impl BatchManifest {
    /// Builds the manifest from a batch outcome and the artifacts its
    /// documents were written to (same order as `outcome.rendered`).
    pub fn from_batch(outcome: &BatchOutcome, artifacts: &[WrittenArtifact]) -> Self {
        Self {
            generated_at: Utc::now(),
            entries: artifacts
                .iter()
                .map(|artifact| ManifestEntry {
                    ticker: artifact.ticker.clone(),
                    category: artifact.category.clone(),
                    path: artifact.path.display().to_string(),
                    bytes: artifact.bytes,
                })
                .collect(),
            failures: outcome
                .failures
                .iter()
                .map(|failure| FailureEntry {
                    ticker: failure.ticker.clone(),
                    error: failure.error.to_string(),
                })
                .collect(),
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }
}

/// Writes the manifest as pretty JSON.
pub fn write_manifest(path: &Path, manifest: &BatchManifest) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("failed to serialize batch manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write manifest to {}", path.display()))?;
    Ok(())
}

/// Writes the flat summary CSV (ticker, category, file, bytes).
pub fn write_summary_csv(path: &Path, manifest: &BatchManifest) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create summary CSV at {}", path.display()))?;
    writer
        .write_record(["ticker", "category", "file", "bytes"])
        .context("failed to write CSV header")?;
    for entry in &manifest.entries {
        writer
            .write_record([
                entry.ticker.as_str(),
                entry.category.as_str(),
                entry.path.as_str(),
                &entry.bytes.to_string(),
            ])
            .with_context(|| format!("failed to write CSV row for {}", entry.ticker))?;
    }
    writer.flush().context("failed to flush summary CSV")?;
    Ok(())
}
