//! Embedded script block: chart dataset + client-behavior declarations.
//!
//! The composer's responsibility ends at emitting these declarations. The
//! refresh timer, haptics, and offline cache are executed later by the
//! consuming environment; nothing here runs during composition.

use crate::chart::HISTORY_LEN;
use crate::domain::{ChartSeries, SignalData};
use crate::theme::ThemeDescriptor;

/// Refresh interval handed to the host environment, in milliseconds.
pub const REFRESH_INTERVAL_MS: u32 = 5_000;

/// Name of the update callback the host environment must supply on `window`.
pub const REFRESH_HOOK: &str = "priceUpdateHook";

/// Cache name in the offline-cache manifest reference.
pub const OFFLINE_CACHE_NAME: &str = "signalpro-v1";

/// Builds the whole script block for one document.
pub fn script_block(signal: &SignalData, theme: &ThemeDescriptor, series: &ChartSeries) -> String {
    let mut js = String::with_capacity(4 * 1024);
    js.push_str(&dataset_declaration(series));
    js.push_str(&directives_declaration());
    js.push_str(&chart_init(signal, theme));
    js.push_str(CLIENT_BEHAVIOR_JS);
    js
}

/// The chart dataset, serialized for client-side rendering. Forecast bands
/// are drawn starting at the last historical index (continuity point).
fn dataset_declaration(series: &ChartSeries) -> String {
    let to_json = |points: &[crate::domain::PricePoint]| {
        serde_json::to_string(&ChartSeries::prices(points)).expect("price vector must serialize")
    };
    let mut js = String::new();
    js.push_str("        const SIGNAL_DATASET = {\n");
    js.push_str(&format!("            historical: {},\n", to_json(&series.historical)));
    js.push_str(&format!("            base: {},\n", to_json(&series.base)));
    js.push_str(&format!("            bull: {},\n", to_json(&series.bull)));
    js.push_str(&format!("            bear: {},\n", to_json(&series.bear)));
    js.push_str(&format!("            forecastOffset: {}\n", HISTORY_LEN - 1));
    js.push_str("        };\n");
    js
}

/// Client-behavior declarations: refresh directive, haptic binding, offline
/// cache manifest reference. Data only; honored by the script below.
fn directives_declaration() -> String {
    let mut js = String::new();
    js.push_str("        const CLIENT_DIRECTIVES = {\n");
    js.push_str(&format!(
        "            refresh: {{ intervalMs: {REFRESH_INTERVAL_MS}, hook: '{REFRESH_HOOK}' }},\n"
    ));
    js.push_str("            haptics: { selector: '.haptic', vibrateMs: 10 },\n");
    js.push_str(&format!(
        "            offlineCache: {{ name: '{OFFLINE_CACHE_NAME}', worker: '/sw.js', assets: ['./'] }}\n"
    ));
    js.push_str("        };\n");
    js
}

fn chart_init(signal: &SignalData, theme: &ThemeDescriptor) -> String {
    let canvas_id = format!("chart-{}", signal.ticker.to_lowercase());
    format!(
        r#"        const chartCtx = document.getElementById('{canvas_id}')?.getContext('2d');
        if (chartCtx) {{
            const pad = Array(SIGNAL_DATASET.forecastOffset).fill(null);
            const total = SIGNAL_DATASET.forecastOffset + SIGNAL_DATASET.base.length;
            new Chart(chartCtx, {{
                type: 'line',
                data: {{
                    labels: Array.from({{length: total}}, (_, i) => i - SIGNAL_DATASET.forecastOffset),
                    datasets: [
                        {{
                            label: 'Historical',
                            data: SIGNAL_DATASET.historical,
                            borderColor: '{accent}',
                            backgroundColor: 'transparent',
                            borderWidth: 2,
                            pointRadius: 0,
                            tension: 0.3
                        }},
                        {{
                            label: 'Bull',
                            data: pad.concat(SIGNAL_DATASET.bull),
                            borderColor: 'rgba(0, 255, 136, 0.3)',
                            borderDash: [5, 5],
                            borderWidth: 1,
                            pointRadius: 0
                        }},
                        {{
                            label: 'Base',
                            data: pad.concat(SIGNAL_DATASET.base),
                            borderColor: '{accent}',
                            borderDash: [5, 5],
                            borderWidth: 2,
                            pointRadius: 0
                        }},
                        {{
                            label: 'Bear',
                            data: pad.concat(SIGNAL_DATASET.bear),
                            borderColor: 'rgba(255, 71, 87, 0.3)',
                            borderDash: [5, 5],
                            borderWidth: 1,
                            pointRadius: 0
                        }}
                    ]
                }},
                options: {{
                    responsive: true,
                    maintainAspectRatio: false,
                    plugins: {{
                        legend: {{ display: false }},
                        tooltip: {{ enabled: false }}
                    }},
                    scales: {{
                        x: {{ display: false, grid: {{ display: false }} }},
                        y: {{ display: false, grid: {{ display: false }} }}
                    }},
                    elements: {{
                        point: {{ radius: 0 }},
                        line: {{ borderWidth: 2 }}
                    }},
                    interaction: {{ intersect: false }}
                }}
            }});
        }}
"#,
        accent = theme.accent,
    )
}

/// Static client runtime honoring the declarations above. The refresh timer
/// only starts if the host injected the named hook; the core supplies no
/// data source of its own.
const CLIENT_BEHAVIOR_JS: &str = r#"
        function vibrate(duration) {
            if ('vibrate' in navigator) {
                navigator.vibrate(duration || CLIENT_DIRECTIVES.haptics.vibrateMs);
            }
        }

        function toggleNotify(element) {
            element.classList.toggle('on');
            vibrate();
        }

        document.addEventListener('DOMContentLoaded', () => {
            const hook = window[CLIENT_DIRECTIVES.refresh.hook];
            if (typeof hook === 'function') {
                setInterval(hook, CLIENT_DIRECTIVES.refresh.intervalMs);
            }

            document.querySelectorAll(CLIENT_DIRECTIVES.haptics.selector).forEach(el => {
                el.addEventListener('click', () => vibrate());
            });
        });

        if ('serviceWorker' in navigator) {
            navigator.serviceWorker.register(CLIENT_DIRECTIVES.offlineCache.worker).catch(() => {});
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart;
    use crate::domain::{ChartPattern, Priority, SignalCategory};
    use crate::theme;

    fn sample_signal() -> SignalData {
        SignalData {
            ticker: "NVDA".into(),
            company_name: "Nvidia".into(),
            category: SignalCategory::PreMarket,
            priority: Priority::Normal,
            current_price: 1125.50,
            price_change: 55.50,
            price_change_percent: 5.2,
            key_stats: vec![],
            strategy: None,
            chart_pattern: None,
            event_label: None,
            timestamp: "Pre-market".into(),
            notifications_enabled: true,
        }
    }

    #[test]
    fn script_embeds_all_four_series() {
        let signal = sample_signal();
        let series = chart::synthesize(signal.current_price, ChartPattern::Breakout).unwrap();
        let theme = theme::resolve(signal.category);
        let js = script_block(&signal, &theme, &series);

        assert!(js.contains("historical:"));
        assert!(js.contains("base:"));
        assert!(js.contains("bull:"));
        assert!(js.contains("bear:"));
        assert!(js.contains("forecastOffset: 19"));
        assert!(js.contains("chart-nvda"));
    }

    #[test]
    fn refresh_directive_is_five_seconds_with_injected_hook() {
        let signal = sample_signal();
        let series = chart::synthesize(signal.current_price, ChartPattern::Breakout).unwrap();
        let theme = theme::resolve(signal.category);
        let js = script_block(&signal, &theme, &series);

        assert!(js.contains("intervalMs: 5000"));
        assert!(js.contains("priceUpdateHook"));
        // The composer emits no data source of its own.
        assert!(!js.contains("Math.random"));
    }

    #[test]
    fn offline_cache_and_haptics_declared() {
        let signal = sample_signal();
        let series = chart::synthesize(signal.current_price, ChartPattern::Breakout).unwrap();
        let theme = theme::resolve(signal.category);
        let js = script_block(&signal, &theme, &series);

        assert!(js.contains("signalpro-v1"));
        assert!(js.contains("serviceWorker"));
        assert!(js.contains(".haptic"));
    }
}
