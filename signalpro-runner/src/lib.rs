//! SignalPro Runner — batch orchestration around the rendering core.
//!
//! Feeds a sequence of signals through the pipeline in parallel, persists
//! each document, and writes the batch manifest + summary artifacts used by
//! downstream deployment tooling. The core stays pure; every file write and
//! thread lives here.

pub mod batch;
pub mod export;
pub mod manifest;
pub mod samples;

pub use batch::{render_batch, BatchFailure, BatchOutcome, RenderedSignal};
pub use export::{ArtifactWriter, WrittenArtifact};
pub use manifest::{BatchManifest, ManifestEntry};
