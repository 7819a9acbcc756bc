//! Parallel batch rendering with partial-failure semantics.
//!
//! Render calls share no state, so the batch fans out across the rayon pool
//! with no coordination. One signal's failure never aborts the batch: it is
//! collected per ticker and reported alongside the successes.

use rayon::prelude::*;

use signalpro_core::domain::SignalData;
use signalpro_core::{render, RenderDiagnostics, RenderError, RenderOptions};
use signalpro_core::Document;

/// One successfully rendered signal.
#[derive(Debug, Clone)]
pub struct RenderedSignal {
    pub document: Document,
    pub diagnostics: RenderDiagnostics,
}

/// One failed signal, identified by ticker so a report can name it.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub ticker: String,
    pub error: RenderError,
}

/// Successes and failures of a batch, both in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub rendered: Vec<RenderedSignal>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders every signal, in parallel, collecting failures instead of
/// propagating them.
pub fn render_batch(signals: &[SignalData], options: &RenderOptions) -> BatchOutcome {
    let results: Vec<Result<RenderedSignal, BatchFailure>> = signals
        .par_iter()
        .map(|signal| {
            render(signal, options)
                .map(|output| RenderedSignal {
                    document: output.document,
                    diagnostics: output.diagnostics,
                })
                .map_err(|error| BatchFailure {
                    ticker: signal.ticker.clone(),
                    error,
                })
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(rendered) => outcome.rendered.push(rendered),
            Err(failure) => outcome.failures.push(failure),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalpro_core::domain::{Priority, SignalCategory};

    fn signal(ticker: &str, price: f64) -> SignalData {
        SignalData {
            ticker: ticker.into(),
            company_name: format!("{ticker} Inc"),
            category: SignalCategory::Earnings,
            priority: Priority::Normal,
            current_price: price,
            price_change: 0.0,
            price_change_percent: 2.0,
            key_stats: vec![],
            strategy: None,
            chart_pattern: None,
            event_label: None,
            timestamp: "Just now".into(),
            notifications_enabled: true,
        }
    }

    #[test]
    fn all_valid_signals_render() {
        let signals = vec![signal("AAA", 10.0), signal("BBB", 20.0)];
        let outcome = render_batch(&signals, &RenderOptions::default());
        assert!(outcome.is_complete());
        assert_eq!(outcome.rendered.len(), 2);
    }

    #[test]
    fn one_failure_does_not_abort_the_rest() {
        let signals = vec![
            signal("AAA", 10.0),
            signal("BAD", -1.0),
            signal("CCC", 30.0),
        ];
        let outcome = render_batch(&signals, &RenderOptions::default());

        assert_eq!(outcome.rendered.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].ticker, "BAD");
        assert!(!outcome.is_complete());
    }

    #[test]
    fn input_order_is_preserved() {
        let signals: Vec<_> = (0..16).map(|i| signal(&format!("T{i:02}"), 5.0 + i as f64)).collect();
        let outcome = render_batch(&signals, &RenderOptions::default());
        let tickers: Vec<_> = outcome.rendered.iter().map(|r| r.document.ticker.as_str()).collect();
        let expected: Vec<String> = (0..16).map(|i| format!("T{i:02}")).collect();
        assert_eq!(tickers, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn batch_output_matches_sequential_render() {
        let signals = vec![signal("AAA", 42.15), signal("BBB", 248.50)];
        let outcome = render_batch(&signals, &RenderOptions::default());
        for (rendered, signal) in outcome.rendered.iter().zip(&signals) {
            let sequential = render(signal, &RenderOptions::default()).unwrap();
            assert_eq!(rendered.document.html, sequential.document.html);
        }
    }
}
