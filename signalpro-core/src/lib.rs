//! SignalPro Core — the signal-to-document rendering pipeline.
//!
//! Turns a structured trading-signal record into a self-contained
//! mobile-optimized document (markup + styling + embedded client behavior):
//! - Domain types (signal record, categories, chart series)
//! - Theme resolution (category → visual treatment, fixed table)
//! - Chart synthesis (deterministic historical trajectory + forecast bands)
//! - Document composition (sections, breakpoint tiers, client directives)
//!
//! The pipeline is a pure, synchronous function from (signal, options) to
//! (document, diagnostics). No I/O, no clock, no shared state — batch
//! rendering parallelizes with no coordination.

pub mod chart;
pub mod compose;
pub mod domain;
pub mod error;
pub mod fingerprint;
pub mod render;
pub mod theme;

pub use compose::Document;
pub use error::RenderError;
pub use render::{render, RenderDiagnostics, RenderOptions, RenderOutput};
