//! Document composition.
//!
//! `compose` assembles the final mobile document from a validated signal, a
//! resolved theme, and a synthesized series — in fixed section order: page
//! header, priority label, signal header, chart block, key-stat grid,
//! strategy block, footer. Composition is total over that domain: once the
//! inputs exist it cannot fail.

mod script;
mod style;

pub use script::{OFFLINE_CACHE_NAME, REFRESH_HOOK, REFRESH_INTERVAL_MS};

use crate::domain::{ChartSeries, KeyStat, SignalCategory, SignalData};
use crate::fingerprint::{self, RenderFingerprint};
use crate::theme::ThemeDescriptor;

/// The stat grid always renders exactly this many cells: fewer supplied
/// stats pad with empty placeholders, more truncate in original order.
pub const STAT_CELLS: usize = 3;

/// The composed render artifact: self-contained markup with embedded style,
/// script, and chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub ticker: String,
    pub category: SignalCategory,
    pub fingerprint: RenderFingerprint,
    pub html: String,
}

impl Document {
    pub fn len_bytes(&self) -> usize {
        self.html.len()
    }
}

/// Assembles the document. Callers are expected to have validated the
/// signal first (`SignalData::validate`); `render` does so.
pub fn compose(signal: &SignalData, theme: &ThemeDescriptor, series: &ChartSeries) -> Document {
    let title = match &signal.strategy {
        Some(strategy) => format!("{} - {}", signal.ticker, strategy.title),
        None => format!("{} - {}", signal.ticker, theme.badge_label),
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("    <title>{}</title>\n", escape(&title)));
    html.push_str(
        "    <script src=\"https://cdnjs.cloudflare.com/ajax/libs/Chart.js/4.4.0/chart.umd.js\"></script>\n",
    );
    html.push_str("    <style>\n");
    html.push_str(&style::stylesheet(theme));
    html.push_str("    </style>\n</head>\n<body>\n");

    page_header(&mut html);

    html.push_str("    <div class=\"signal-card\">\n");
    priority_label(&mut html, signal);
    signal_header(&mut html, signal, theme);
    chart_block(&mut html, signal);
    stat_grid(&mut html, &signal.key_stats);
    strategy_block(&mut html, signal);
    footer(&mut html, signal);
    html.push_str("    </div>\n\n");

    html.push_str("    <script>\n");
    html.push_str(&script::script_block(signal, theme, series));
    html.push_str("    </script>\n</body>\n</html>\n");

    Document {
        ticker: signal.ticker.clone(),
        category: signal.category,
        fingerprint: fingerprint::fingerprint(signal),
        html,
    }
}

/// Logo plus back-navigation placeholder.
fn page_header(html: &mut String) {
    html.push_str(
        r#"    <div class="header">
        <div class="logo">SignalPro</div>
        <a href="../summary.html" class="back-button haptic">&larr; Back</a>
    </div>

"#,
    );
}

fn priority_label(html: &mut String, signal: &SignalData) {
    let label = signal.priority.label();
    if !label.is_empty() {
        html.push_str(&format!("        <div class=\"hot-label\">{label}</div>\n"));
    }
}

fn signal_header(html: &mut String, signal: &SignalData, theme: &ThemeDescriptor) {
    let (change_text, change_class) = format_change(signal.price_change_percent);
    html.push_str(&format!(
        r#"        <div class="signal-header">
            <div class="ticker-main">
                <span class="ticker">{ticker}</span>
                <span class="strategy-badge {badge_class}">{badge_label}</span>
            </div>
            <div class="company-name">{company}</div>
            <div class="price-row">
                <span class="price">${price}</span>
                <span class="change {change_class}">{change_text}</span>
            </div>
        </div>

"#,
        ticker = escape(&signal.ticker),
        badge_class = theme.badge_class,
        badge_label = theme.badge_label,
        company = escape(&signal.company_name),
        price = format_price(signal.current_price),
    ));
}

fn chart_block(html: &mut String, signal: &SignalData) {
    html.push_str(&format!(
        r#"        <div class="chart-section">
            <canvas id="chart-{ticker_lower}"></canvas>
            <div class="event-label">{event_label}</div>
            <div class="prediction-indicator">&larr; now | prediction &rarr;</div>
        </div>

"#,
        ticker_lower = signal.ticker.to_lowercase(),
        event_label = escape(&signal.event_label()),
    ));
}

/// Exactly `STAT_CELLS` cells, deterministically: truncate past three,
/// pad the remainder with unlabeled placeholders.
fn stat_grid(html: &mut String, stats: &[KeyStat]) {
    html.push_str("        <div class=\"key-stats\">\n");
    for cell in 0..STAT_CELLS {
        match stats.get(cell) {
            Some(stat) => {
                let color_class = if stat.positive {
                    " positive"
                } else if stat.value.starts_with('-') {
                    " negative"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "            <div class=\"stat\">\n                <div class=\"stat-value{color_class}\">{}</div>\n                <div class=\"stat-label\">{}</div>\n            </div>\n",
                    escape(&stat.value),
                    escape(&stat.label),
                ));
            }
            None => {
                html.push_str("            <div class=\"stat stat-empty\"></div>\n");
            }
        }
    }
    html.push_str("        </div>\n\n");
}

/// Rendered only when a strategy is present; omitted entirely otherwise.
fn strategy_block(html: &mut String, signal: &SignalData) {
    let Some(strategy) = &signal.strategy else {
        return;
    };
    html.push_str(&format!(
        r#"        <div class="strategy-info">
            <div class="strategy-title">{title}</div>
            <div class="strategy-desc">{desc}</div>
            <a href="{url}" class="strategy-link">{link_text}</a>
        </div>

"#,
        title = escape(&strategy.title),
        desc = escape(&strategy.description),
        url = escape(strategy.link_url()),
        link_text = escape(strategy.link_text()),
    ));
}

fn footer(html: &mut String, signal: &SignalData) {
    let toggle_state = if signal.notifications_enabled { " on" } else { "" };
    html.push_str(&format!(
        r#"        <div class="signal-footer">
            <div class="notify-toggle">
                <span>Exit alert</span>
                <div class="toggle{toggle_state} haptic" onclick="toggleNotify(this)">
                    <div class="toggle-knob"></div>
                </div>
            </div>
            <span>{timestamp}</span>
        </div>
"#,
        timestamp = escape(&signal.timestamp),
    ));
}

/// Minimal HTML entity escaping for text interpolated into markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Two decimals with thousands separators ($105,456.00).
fn format_price(price: f64) -> String {
    let fixed = format!("{price:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(fixed.len() + 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Signed percent text plus its sign-based color class. Matches the
/// original's strict `> 0` check: zero renders with the negative class.
fn format_change(percent: f64) -> (String, &'static str) {
    if percent > 0.0 {
        (format!("+{percent:.1}%"), "positive")
    } else {
        (format!("{percent:.1}%"), "negative")
    }
}
