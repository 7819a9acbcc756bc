//! End-to-end pipeline scenarios: one render call from signal record to
//! finished document, checking the concrete numbers a downstream chart
//! client would receive.

use signalpro_core::domain::{
    ChartPattern, KeyStat, Priority, SignalCategory, SignalData, StrategyInfo,
};
use signalpro_core::theme::{self, Animation, BorderStyle};
use signalpro_core::{render, RenderError, RenderOptions};

const EPSILON: f64 = 1e-9;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn signal(ticker: &str, category: SignalCategory, price: f64) -> SignalData {
    SignalData {
        ticker: ticker.into(),
        company_name: format!("{ticker} Holdings"),
        category,
        priority: Priority::Normal,
        current_price: price,
        price_change: 0.0,
        price_change_percent: 1.0,
        key_stats: vec![],
        strategy: None,
        chart_pattern: None,
        event_label: None,
        timestamp: "Just now".into(),
        notifications_enabled: true,
    }
}

#[test]
fn ipo_breakout_scenario_produces_expected_bands() {
    let mut sig = signal("CRCL", SignalCategory::IpoToday, 69.0);
    sig.chart_pattern = Some("breakout".into());
    sig.priority = Priority::Hot;
    sig.key_stats = vec![
        KeyStat::new("223%", "Day 1 High", true),
        KeyStat::new("$6.8B", "Valuation", true),
        KeyStat::new("46M", "Volume", true),
    ];
    sig.strategy = Some(StrategyInfo {
        title: "Hot IPO Momentum Play".into(),
        description: "Watch for dip to $60-65 for entry.".into(),
        link_text: None,
        link_url: None,
    });

    let output = render(&sig, &RenderOptions::default()).unwrap();
    assert_eq!(output.diagnostics.pattern, ChartPattern::Breakout);

    // The document embeds the synthesized dataset; spot-check the numbers
    // the client chart will draw (d=0.20, v=0.05 at $69).
    let series =
        signalpro_core::chart::synthesize(69.0, ChartPattern::Breakout).unwrap();
    assert_approx(series.base[10].price, 82.80);
    assert_approx(series.bull[10].price, 91.08);
    assert_approx(series.bear[10].price, 74.52);
    assert_approx(series.historical[0].price, 57.50);
    assert_eq!(series.historical[19].price, 69.0);

    let html = &output.document.html;
    assert!(html.contains("IPO TODAY"));
    assert!(html.contains("🔥 HOT"));
    assert!(html.contains("$69.00"));
    assert!(html.contains("Hot IPO Momentum Play"));
}

#[test]
fn momentum_scenario_start_price() {
    let mut sig = signal("TSLA", SignalCategory::StockSplit, 248.50);
    sig.chart_pattern = Some("momentum".into());
    let output = render(&sig, &RenderOptions::default()).unwrap();
    assert_eq!(output.diagnostics.pattern, ChartPattern::Momentum);

    let series =
        signalpro_core::chart::synthesize(248.50, ChartPattern::Momentum).unwrap();
    assert_approx(series.base[10].price, 335.475);
    let rounded = (series.historical[0].price * 10_000.0).round() / 10_000.0;
    assert_approx(rounded, 184.0741);
}

#[test]
fn fda_event_defaults_to_volatile_with_teal_theme() {
    let sig = signal("SAVA", SignalCategory::FdaEvent, 42.15);
    let output = render(&sig, &RenderOptions::default()).unwrap();

    assert_eq!(output.diagnostics.pattern, ChartPattern::Volatile);
    assert!(output.diagnostics.pattern_defaulted);

    let theme = theme::resolve(SignalCategory::FdaEvent);
    assert_eq!(theme.gradient, ["#16a085", "#16a085"]);
    assert_eq!(theme.border_style, BorderStyle::Solid);
    assert_eq!(theme.animation, Animation::None);
    assert!(output.document.html.contains("#16a085"));
}

#[test]
fn negative_price_never_reaches_composition() {
    let sig = signal("XXX", SignalCategory::Earnings, -5.0);
    let err = render(&sig, &RenderOptions::default()).unwrap_err();
    // Fail-early: validation rejects the price before synthesize runs.
    assert!(matches!(err, RenderError::Validation { .. }));

    // Called directly, synthesize reports the same price as InvalidPrice.
    let err = signalpro_core::chart::synthesize(-5.0, ChartPattern::Breakout).unwrap_err();
    assert_eq!(err, RenderError::InvalidPrice(-5.0));
}

#[test]
fn zero_key_stats_render_three_placeholders() {
    let sig = signal("AMD", SignalCategory::UnusualOptions, 185.40);
    let output = render(&sig, &RenderOptions::default()).unwrap();
    assert_eq!(output.diagnostics.stats_padded, 3);
    assert_eq!(output.document.html.matches("stat-empty").count(), 3);
}

#[test]
fn every_category_renders_without_error() {
    for category in SignalCategory::ALL {
        let sig = signal("TEST", category, 100.0);
        let output = render(&sig, &RenderOptions::default())
            .unwrap_or_else(|e| panic!("{category} failed: {e}"));
        let theme = theme::resolve(category);
        assert!(output.document.html.contains(theme.badge_label));
    }
}

#[test]
fn batch_of_signals_renders_independently() {
    // One bad signal must not poison the others (partial-failure semantics
    // live in the orchestrator, but independence is a core property).
    let signals = vec![
        signal("AAA", SignalCategory::Earnings, 10.0),
        signal("BAD", SignalCategory::Earnings, 0.0),
        signal("CCC", SignalCategory::Earnings, 30.0),
    ];
    let results: Vec<_> = signals
        .iter()
        .map(|s| render(s, &RenderOptions::default()))
        .collect();

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}
