//! Per-category visual themes.
//!
//! A fixed table maps each of the ten signal categories to a
//! [`ThemeDescriptor`]: gradient tokens, border style, animation, and badge
//! treatment. The table is an exhaustive match, so "every category has
//! exactly one theme entry" is enforced at compile time; a test additionally
//! walks all variants at startup granularity.

use serde::{Deserialize, Serialize};

use crate::domain::SignalCategory;
use crate::error::RenderError;

/// Card border treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
}

impl BorderStyle {
    pub fn css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }
}

/// Card animation treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    None,
    Pulse,
    Glow,
}

/// Resolved visual treatment for one signal category.
///
/// Produced once per render call and never mutated. Single-tone categories
/// carry the same token twice in `gradient` (ordered-pair invariant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeDescriptor {
    pub category: Option<SignalCategory>,
    pub badge_class: &'static str,
    pub badge_label: &'static str,
    pub gradient: [&'static str; 2],
    pub accent: &'static str,
    pub border_style: BorderStyle,
    pub animation: Animation,
}

impl ThemeDescriptor {
    /// True when the card background is a real two-tone gradient rather than
    /// a single tone.
    pub fn has_gradient(self) -> bool {
        self.gradient[0] != self.gradient[1]
    }

    /// Documented neutral theme for out-of-enumeration category tokens:
    /// gray, solid border, no animation. Lets a batch render substitute a
    /// usable card instead of aborting.
    pub fn fallback() -> Self {
        Self {
            category: None,
            badge_class: "neutral-signal",
            badge_label: "SIGNAL",
            gradient: ["#808080", "#808080"],
            accent: "#808080",
            border_style: BorderStyle::Solid,
            animation: Animation::None,
        }
    }
}

/// Pure, total lookup: category → theme. Backed by a fixed table covering
/// all ten categories.
pub fn resolve(category: SignalCategory) -> ThemeDescriptor {
    let (badge_class, badge_label, gradient, accent, border_style, animation) = match category {
        SignalCategory::IpoToday => (
            "ipo-debut",
            "IPO TODAY",
            ["#ff4757", "#ff6348"],
            "#ff4757",
            BorderStyle::Solid,
            Animation::Pulse,
        ),
        SignalCategory::YoloCalls => (
            "yolo-play",
            "YOLO CALLS",
            ["#ff00ff", "#ff4757"],
            "#ff00ff",
            BorderStyle::Solid,
            Animation::Glow,
        ),
        SignalCategory::PreMarket => (
            "pre-market",
            "PRE MARKET",
            ["#ffd93d", "#ffd93d"],
            "#ffd93d",
            BorderStyle::Dashed,
            Animation::None,
        ),
        SignalCategory::StockSplit => (
            "stock-split",
            "STOCK SPLIT",
            ["#3498db", "#3498db"],
            "#3498db",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::PutSpread => (
            "option-spread",
            "PUT SPREAD",
            ["#e74c3c", "#e74c3c"],
            "#e74c3c",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::CryptoDefi => (
            "crypto-play",
            "CRYPTO DEFI",
            ["#f7931a", "#f7931a"],
            "#f7931a",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::FdaEvent => (
            "fda-event",
            "FDA EVENT",
            ["#16a085", "#16a085"],
            "#16a085",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::Earnings => (
            "post-market",
            "EARNINGS",
            ["#95a5a6", "#95a5a6"],
            "#95a5a6",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::UnusualOptions => (
            "indicator-signal",
            "UNUSUAL OPTIONS",
            ["#d35400", "#d35400"],
            "#d35400",
            BorderStyle::Solid,
            Animation::None,
        ),
        SignalCategory::MemeSqueeze => (
            "yolo-play",
            "MEME SQUEEZE",
            ["#ff00ff", "#ff4757"],
            "#ff00ff",
            BorderStyle::Solid,
            Animation::Glow,
        ),
    };
    ThemeDescriptor {
        category: Some(category),
        badge_class,
        badge_label,
        gradient,
        accent,
        border_style,
        animation,
    }
}

/// Resolves from the external string form. This is the reachable
/// `UnknownCategory` path; `resolve` itself is total over the enum.
pub fn resolve_token(token: &str) -> Result<ThemeDescriptor, RenderError> {
    token.parse::<SignalCategory>().map(resolve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_to_a_theme() {
        for category in SignalCategory::ALL {
            let theme = resolve(category);
            assert_eq!(theme.category, Some(category));
            assert!(!theme.badge_label.is_empty());
            assert!(!theme.badge_class.is_empty());
            assert!(theme.gradient[0].starts_with('#'));
            assert!(theme.gradient[1].starts_with('#'));
            assert!(!theme.border_style.css().is_empty());
        }
    }

    #[test]
    fn ipo_theme_is_red_gradient_pulse() {
        let theme = resolve(SignalCategory::IpoToday);
        assert_eq!(theme.gradient, ["#ff4757", "#ff6348"]);
        assert!(theme.has_gradient());
        assert_eq!(theme.border_style, BorderStyle::Solid);
        assert_eq!(theme.animation, Animation::Pulse);
    }

    #[test]
    fn pre_market_is_single_tone_dashed() {
        let theme = resolve(SignalCategory::PreMarket);
        assert!(!theme.has_gradient());
        assert_eq!(theme.border_style, BorderStyle::Dashed);
        assert_eq!(theme.animation, Animation::None);
    }

    #[test]
    fn meme_squeeze_shares_yolo_treatment() {
        let yolo = resolve(SignalCategory::YoloCalls);
        let meme = resolve(SignalCategory::MemeSqueeze);
        assert_eq!(yolo.gradient, meme.gradient);
        assert_eq!(yolo.badge_class, meme.badge_class);
        assert_eq!(meme.animation, Animation::Glow);
        // Badge labels still differ.
        assert_ne!(yolo.badge_label, meme.badge_label);
    }

    #[test]
    fn fda_theme_is_teal_solid_no_animation() {
        let theme = resolve(SignalCategory::FdaEvent);
        assert_eq!(theme.gradient, ["#16a085", "#16a085"]);
        assert_eq!(theme.border_style, BorderStyle::Solid);
        assert_eq!(theme.animation, Animation::None);
    }

    #[test]
    fn unknown_token_falls_back_when_caller_chooses() {
        let err = resolve_token("DOGE_WEATHER").unwrap_err();
        assert!(matches!(err, RenderError::UnknownCategory(_)));

        let fallback = ThemeDescriptor::fallback();
        assert_eq!(fallback.category, None);
        assert_eq!(fallback.border_style, BorderStyle::Solid);
        assert_eq!(fallback.animation, Animation::None);
        assert!(!fallback.has_gradient());
    }

    #[test]
    fn resolve_token_accepts_known_tokens() {
        let theme = resolve_token("MEME_SQUEEZE").unwrap();
        assert_eq!(theme.category, Some(SignalCategory::MemeSqueeze));
    }
}
