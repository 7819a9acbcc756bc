//! Artifact persistence: one HTML file per rendered signal.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use signalpro_core::Document;

use crate::batch::BatchOutcome;

/// A persisted document: where it landed and how big it is.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    pub ticker: String,
    pub category: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Writes rendered documents into one output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Artifact naming convention: `{ticker}_{category_lowercase}.html`.
    pub fn file_name(document: &Document) -> String {
        format!("{}_{}.html", document.ticker, document.category.token())
    }

    /// Persists one document and reports its size.
    pub fn write_document(&self, document: &Document) -> Result<WrittenArtifact> {
        let path = self.output_dir.join(Self::file_name(document));
        std::fs::write(&path, &document.html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(WrittenArtifact {
            ticker: document.ticker.clone(),
            category: document.category.token().to_string(),
            path,
            bytes: document.html.len() as u64,
        })
    }

    /// Persists every rendered document of a batch, in order.
    pub fn write_batch(&self, outcome: &BatchOutcome) -> Result<Vec<WrittenArtifact>> {
        outcome
            .rendered
            .iter()
            .map(|rendered| self.write_document(&rendered.document))
            .collect()
    }
}
