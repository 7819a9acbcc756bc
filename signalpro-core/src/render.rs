//! Pipeline entry point: validate → resolve theme → synthesize → compose.
//!
//! A render call is single-pass, synchronous, and owns all of its inputs and
//! outputs; no state is shared between calls. Callers implement retry or
//! cancellation around the call, never inside it.

use std::str::FromStr;

use crate::chart;
use crate::compose::{self, Document, STAT_CELLS};
use crate::domain::{ChartPattern, SignalData};
use crate::error::RenderError;
use crate::theme;

/// Per-call knobs. `Default` renders exactly what the signal says.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Overrides both the signal's pattern token and the category default.
    pub pattern_override: Option<ChartPattern>,
    /// Substitute breakout for an out-of-set pattern token instead of
    /// failing the render.
    pub fallback_pattern_on_unknown: bool,
}

/// What the pipeline decided along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDiagnostics {
    /// Pattern the series was synthesized with.
    pub pattern: ChartPattern,
    /// True when the signal carried no usable pattern and the category
    /// default (or breakout fallback) was used.
    pub pattern_defaulted: bool,
    /// Key stats dropped past the third cell.
    pub stats_truncated: usize,
    /// Placeholder cells emitted to fill the grid.
    pub stats_padded: usize,
}

/// A composed document plus its diagnostics.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub document: Document,
    pub diagnostics: RenderDiagnostics,
}

/// Renders one signal to a self-contained document.
///
/// Fails early on invalid required fields, before any theme or chart work.
pub fn render(signal: &SignalData, options: &RenderOptions) -> Result<RenderOutput, RenderError> {
    signal.validate()?;

    let (pattern, pattern_defaulted) = resolve_pattern(signal, options)?;
    let theme = theme::resolve(signal.category);
    let series = chart::synthesize(signal.current_price, pattern)?;
    let document = compose::compose(signal, &theme, &series);

    let supplied = signal.key_stats.len();
    Ok(RenderOutput {
        document,
        diagnostics: RenderDiagnostics {
            pattern,
            pattern_defaulted,
            stats_truncated: supplied.saturating_sub(STAT_CELLS),
            stats_padded: STAT_CELLS.saturating_sub(supplied),
        },
    })
}

fn resolve_pattern(
    signal: &SignalData,
    options: &RenderOptions,
) -> Result<(ChartPattern, bool), RenderError> {
    if let Some(pattern) = options.pattern_override {
        return Ok((pattern, false));
    }
    match &signal.chart_pattern {
        Some(token) => match ChartPattern::from_str(token) {
            Ok(pattern) => Ok((pattern, false)),
            Err(_) if options.fallback_pattern_on_unknown => Ok((ChartPattern::Breakout, true)),
            Err(err) => Err(err),
        },
        None => Ok((signal.category.default_pattern(), true)),
    }
}
