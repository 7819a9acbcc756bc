//! Theme-keyed style block.
//!
//! Everything layout-related here is declarative: the composer emits the
//! breakpoint rules and animation keyframes, the consuming browser applies
//! them. Three tiers: default (desktop), ≤375px condensed, ≤200px minimal.

use crate::theme::{Animation, ThemeDescriptor};

/// Static base rules shared by every document: page chrome, header, stat
/// grid, strategy block, footer, toggle, and the two mobile breakpoints.
const BASE_CSS: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #000000;
            color: #ffffff;
            padding: 10px;
            max-width: 420px;
            margin: 0 auto;
            min-height: 100vh;
            -webkit-font-smoothing: antialiased;
        }

        .header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 15px 5px;
            margin-bottom: 15px;
        }

        .logo {
            font-size: 22px;
            font-weight: bold;
            background: linear-gradient(45deg, #00ff88, #00d4ff, #ff00ff);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }

        .back-button {
            display: flex;
            align-items: center;
            gap: 5px;
            color: #00ff88;
            text-decoration: none;
            font-size: 14px;
            font-weight: 500;
        }

        @keyframes fadeIn {
            from { opacity: 0; transform: translateY(10px); }
            to { opacity: 1; transform: translateY(0); }
        }

        .hot-label {
            position: absolute;
            top: 10px;
            right: 10px;
            background: linear-gradient(135deg, #ff4757, #ff6348);
            color: white;
            font-size: 9px;
            font-weight: bold;
            padding: 3px 8px;
            border-radius: 10px;
            text-transform: uppercase;
            animation: hot-pulse 2s infinite;
        }

        @keyframes hot-pulse {
            0%, 100% { transform: scale(1); }
            50% { transform: scale(1.1); }
        }

        .signal-header {
            margin-bottom: 12px;
        }

        .ticker-main {
            display: flex;
            align-items: center;
            gap: 8px;
            margin-bottom: 4px;
        }

        .ticker {
            font-size: 20px;
            font-weight: bold;
        }

        .strategy-badge {
            padding: 4px 10px;
            border-radius: 12px;
            font-size: 10px;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .company-name {
            font-size: 12px;
            color: #666;
            margin-bottom: 6px;
        }

        .price-row {
            display: flex;
            align-items: baseline;
            gap: 8px;
        }

        .price {
            font-size: 24px;
            font-weight: bold;
        }

        .change {
            font-size: 14px;
            font-weight: 600;
        }

        .positive { color: #00ff88; }
        .negative { color: #ff4757; }

        .chart-section {
            height: 100px;
            margin-bottom: 12px;
            position: relative;
            background: rgba(255, 255, 255, 0.02);
            border-radius: 10px;
            padding: 8px;
        }

        .event-label {
            position: absolute;
            top: 8px;
            right: 8px;
            background: rgba(0, 0, 0, 0.8);
            padding: 3px 8px;
            border-radius: 6px;
            font-size: 10px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            z-index: 10;
        }

        .prediction-indicator {
            position: absolute;
            bottom: 4px;
            left: 50%;
            transform: translateX(-50%);
            font-size: 9px;
            color: #666;
            letter-spacing: 0.5px;
            text-transform: uppercase;
        }

        .key-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 8px;
            margin-bottom: 12px;
        }

        .stat {
            text-align: center;
            padding: 8px 4px;
            background: rgba(255, 255, 255, 0.05);
            border-radius: 8px;
        }

        .stat-value {
            font-size: 16px;
            font-weight: bold;
            margin-bottom: 2px;
        }

        .stat-label {
            font-size: 10px;
            color: #666;
            text-transform: uppercase;
        }

        .stat-empty {
            background: rgba(255, 255, 255, 0.02);
            min-height: 42px;
        }

        .strategy-info {
            background: rgba(255, 255, 255, 0.03);
            border-radius: 10px;
            padding: 12px;
            margin-bottom: 12px;
            border: 1px solid rgba(255, 255, 255, 0.08);
        }

        .strategy-title {
            font-size: 13px;
            font-weight: 600;
            margin-bottom: 6px;
            color: #00d4ff;
        }

        .strategy-desc {
            font-size: 12px;
            line-height: 1.4;
            color: #aaa;
            margin-bottom: 6px;
        }

        .strategy-link {
            color: #00ff88;
            text-decoration: none;
            font-size: 11px;
            font-weight: 500;
        }

        .signal-footer {
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-size: 11px;
            color: #666;
        }

        .notify-toggle {
            display: flex;
            align-items: center;
            gap: 6px;
        }

        .toggle {
            width: 36px;
            height: 20px;
            background: #333;
            border-radius: 10px;
            position: relative;
            cursor: pointer;
            transition: background 0.3s;
        }

        .toggle.on {
            background: #00ff88;
        }

        .toggle-knob {
            width: 16px;
            height: 16px;
            background: white;
            border-radius: 50%;
            position: absolute;
            top: 2px;
            left: 2px;
            transition: transform 0.3s;
        }

        .toggle.on .toggle-knob {
            transform: translateX(16px);
        }

        .haptic {
            cursor: pointer;
            -webkit-tap-highlight-color: transparent;
        }

        /* Condensed tier */
        @media (max-width: 375px) {
            .signal-card { padding: 12px; }
            .ticker { font-size: 18px; }
            .price { font-size: 22px; }
            .key-stats { gap: 6px; }
            .stat { padding: 6px 4px; }
            .stat-value { font-size: 14px; }
            .stat-label { display: block; }
        }

        /* Minimal tier: ticker + price + one headline stat */
        @media (max-width: 200px) {
            body { padding: 8px; }
            .signal-card { padding: 10px; }
            .ticker { font-size: 16px; }
            .price { font-size: 18px; }
            .chart-section { height: 50px; }
            .key-stats { grid-template-columns: 1fr; }
            .stat:not(:first-child) { display: none; }
            .strategy-info { display: none; }
            .company-name { display: none; }
        }
"#;

const PULSE_KEYFRAMES: &str = r#"        @keyframes card-pulse {
            0%, 100% { transform: scale(1); }
            50% { transform: scale(1.01); }
        }
"#;

const GLOW_KEYFRAMES: &str = r#"        @keyframes card-glow {
            0%, 100% { box-shadow: 0 0 10px rgba(255, 0, 255, 0.3); }
            50% { box-shadow: 0 0 20px rgba(255, 0, 255, 0.5); }
        }
"#;

/// Builds the embedded style block for one theme.
pub fn stylesheet(theme: &ThemeDescriptor) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + 1024);
    css.push_str(BASE_CSS);

    // Card surface: a real two-tone gradient for gradient themes, a dark
    // neutral surface for single-tone themes (the tone still drives the
    // border and badge).
    let card_bg = if theme.has_gradient() {
        format!(
            "linear-gradient(135deg, {}, {})",
            theme.gradient[0], theme.gradient[1]
        )
    } else {
        "linear-gradient(135deg, #1a1a1a 0%, #2a2a2a 100%)".to_string()
    };

    let animation = match theme.animation {
        Animation::None => String::new(),
        Animation::Pulse => "\n            animation: card-pulse 2s ease-in-out infinite;".into(),
        Animation::Glow => "\n            animation: card-glow 3s ease-in-out infinite;".into(),
    };

    css.push_str(&format!(
        r#"        .signal-card {{
            background: {card_bg};
            border-radius: 16px;
            padding: 16px;
            border: 1px {border} {accent};
            position: relative;
            overflow: hidden;
            animation: fadeIn 0.5s ease;{animation}
        }}

        .{badge_class} {{
            background: {badge_bg};
            color: {badge_fg};
        }}
"#,
        border = theme.border_style.css(),
        accent = theme.accent,
        badge_class = theme.badge_class,
        badge_bg = if theme.has_gradient() {
            format!(
                "linear-gradient(135deg, {}, {})",
                theme.gradient[0], theme.gradient[1]
            )
        } else {
            theme.gradient[0].to_string()
        },
        badge_fg = badge_foreground(theme.gradient[0]),
    ));

    match theme.animation {
        Animation::None => {}
        Animation::Pulse => css.push_str(PULSE_KEYFRAMES),
        Animation::Glow => css.push_str(GLOW_KEYFRAMES),
    }

    css
}

/// Light badge tones need dark text (the original's pre-market and crypto
/// badges).
fn badge_foreground(tone: &str) -> &'static str {
    match tone {
        "#ffd93d" | "#f7931a" => "#000",
        _ => "#fff",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SignalCategory;
    use crate::theme;

    #[test]
    fn gradient_theme_paints_the_card() {
        let css = stylesheet(&theme::resolve(SignalCategory::IpoToday));
        assert!(css.contains("linear-gradient(135deg, #ff4757, #ff6348)"));
        assert!(css.contains("border: 1px solid #ff4757"));
        assert!(css.contains("card-pulse"));
    }

    #[test]
    fn single_tone_theme_keeps_neutral_card() {
        let css = stylesheet(&theme::resolve(SignalCategory::StockSplit));
        assert!(css.contains("#1a1a1a"));
        assert!(css.contains(".stock-split"));
        assert!(!css.contains("card-pulse"));
        assert!(!css.contains("card-glow"));
    }

    #[test]
    fn dashed_border_for_pre_market() {
        let css = stylesheet(&theme::resolve(SignalCategory::PreMarket));
        assert!(css.contains("border: 1px dashed #ffd93d"));
        assert!(css.contains("color: #000"));
    }

    #[test]
    fn breakpoint_tiers_are_present_for_every_theme() {
        for category in SignalCategory::ALL {
            let css = stylesheet(&theme::resolve(category));
            assert!(css.contains("@media (max-width: 375px)"));
            assert!(css.contains("@media (max-width: 200px)"));
            assert!(css.contains("height: 100px"));
        }
    }
}
