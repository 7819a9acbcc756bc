//! Error taxonomy for the rendering pipeline.
//!
//! All errors are local to a single render call. A batch renderer treats one
//! signal's failure as independent of the others; the core itself never
//! retries (it has no transient dependencies to retry against).

/// Errors produced by the signal → document pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// A required input field is missing or malformed. Surfaced before any
    /// theme or chart work is attempted; never recoverable by fallback.
    #[error("invalid signal field `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A category token outside the closed enumeration. Only reachable via
    /// the external string form (`SignalCategory::from_str` /
    /// `theme::resolve_token`); callers may substitute
    /// [`crate::theme::ThemeDescriptor::fallback`] instead of aborting.
    #[error("unknown signal category token `{0}`")]
    UnknownCategory(String),

    /// A chart-pattern token outside momentum|breakout|volatile|decline.
    /// Recoverable: callers may fall back to breakout
    /// (`RenderOptions::fallback_pattern_on_unknown`).
    #[error("unknown chart pattern token `{0}`")]
    UnknownPattern(String),

    /// Non-positive current price. Fatal for this signal, independent of the
    /// rest of a batch.
    #[error("current price must be positive, got {0}")]
    InvalidPrice(f64),
}

impl RenderError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = RenderError::UnknownPattern("sideways".into());
        assert!(err.to_string().contains("sideways"));

        let err = RenderError::InvalidPrice(-5.0);
        assert!(err.to_string().contains("-5"));
    }
}
