//! Signal records — the input side of the rendering pipeline.
//!
//! Everything here is a plain value object: created fresh per render call,
//! owned by that call, never shared or mutated across calls. That ownership
//! model is what makes batch rendering embarrassingly parallel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ChartPattern;
use crate::error::RenderError;

/// Closed classification of a signal. Drives the visual theme and the
/// default chart pattern.
///
/// Adding a category is a compile-time-visible change: the theme table and
/// default-pattern lookup are exhaustive matches, so a new variant fails to
/// build until both are extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalCategory {
    IpoToday,
    YoloCalls,
    PreMarket,
    StockSplit,
    PutSpread,
    CryptoDefi,
    FdaEvent,
    Earnings,
    UnusualOptions,
    MemeSqueeze,
}

impl SignalCategory {
    /// All ten variants, in declaration order.
    pub const ALL: [SignalCategory; 10] = [
        Self::IpoToday,
        Self::YoloCalls,
        Self::PreMarket,
        Self::StockSplit,
        Self::PutSpread,
        Self::CryptoDefi,
        Self::FdaEvent,
        Self::Earnings,
        Self::UnusualOptions,
        Self::MemeSqueeze,
    ];

    /// Lowercase token used in artifact file names (`{ticker}_{token}.html`).
    pub fn token(self) -> &'static str {
        match self {
            Self::IpoToday => "ipo_today",
            Self::YoloCalls => "yolo_calls",
            Self::PreMarket => "pre_market",
            Self::StockSplit => "stock_split",
            Self::PutSpread => "put_spread",
            Self::CryptoDefi => "crypto_defi",
            Self::FdaEvent => "fda_event",
            Self::Earnings => "earnings",
            Self::UnusualOptions => "unusual_options",
            Self::MemeSqueeze => "meme_squeeze",
        }
    }

    /// Chart pattern used when the signal does not carry one.
    pub fn default_pattern(self) -> ChartPattern {
        match self {
            Self::IpoToday | Self::YoloCalls | Self::MemeSqueeze => ChartPattern::Momentum,
            Self::CryptoDefi | Self::FdaEvent => ChartPattern::Volatile,
            Self::PreMarket
            | Self::UnusualOptions
            | Self::StockSplit
            | Self::PutSpread
            | Self::Earnings => ChartPattern::Breakout,
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SignalCategory {
    type Err = RenderError;

    /// Parses the external token form (`IPO_TODAY`, case-insensitive).
    ///
    /// This is the only way an out-of-enumeration category can be observed:
    /// inside the type system the set is closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IPO_TODAY" => Ok(Self::IpoToday),
            "YOLO_CALLS" => Ok(Self::YoloCalls),
            "PRE_MARKET" => Ok(Self::PreMarket),
            "STOCK_SPLIT" => Ok(Self::StockSplit),
            "PUT_SPREAD" => Ok(Self::PutSpread),
            "CRYPTO_DEFI" => Ok(Self::CryptoDefi),
            "FDA_EVENT" => Ok(Self::FdaEvent),
            "EARNINGS" => Ok(Self::Earnings),
            "UNUSUAL_OPTIONS" => Ok(Self::UnusualOptions),
            "MEME_SQUEEZE" => Ok(Self::MemeSqueeze),
            _ => Err(RenderError::UnknownCategory(s.to_string())),
        }
    }
}

/// Badge emphasis only. Has no effect on chart math or layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Normal,
    Hot,
    Urgent,
    Watch,
}

impl Priority {
    /// Badge text. Empty for Normal — no label is rendered.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Hot => "🔥 HOT",
            Self::Urgent => "⚡ URGENT",
            Self::Watch => "👀 WATCH",
        }
    }
}

/// One cell of the key-stat grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStat {
    pub value: String,
    pub label: String,
    #[serde(default = "default_positive")]
    pub positive: bool,
}

fn default_positive() -> bool {
    true
}

impl KeyStat {
    pub fn new(value: impl Into<String>, label: impl Into<String>, positive: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            positive,
        }
    }
}

/// Strategy write-up attached to a signal. Optional; the composer omits the
/// whole block when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl StrategyInfo {
    pub fn link_text(&self) -> &str {
        self.link_text.as_deref().unwrap_or("Learn more →")
    }

    pub fn link_url(&self) -> &str {
        self.link_url.as_deref().unwrap_or("https://example.com/strategy")
    }
}

/// Complete signal record as supplied by upstream scan engines.
///
/// `chart_pattern` carries the wire token (momentum|breakout|volatile|
/// decline); it is parsed during rendering so that an out-of-set token
/// surfaces as a recoverable `UnknownPattern` rather than a deserialization
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalData {
    pub ticker: String,
    pub company_name: String,
    pub category: SignalCategory,
    #[serde(default)]
    pub priority: Priority,
    pub current_price: f64,
    #[serde(default)]
    pub price_change: f64,
    pub price_change_percent: f64,
    #[serde(default)]
    pub key_stats: Vec<KeyStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    #[serde(default = "default_timestamp")]
    pub timestamp: String,
    #[serde(default = "default_notifications")]
    pub notifications_enabled: bool,
}

fn default_timestamp() -> String {
    "Just now".to_string()
}

fn default_notifications() -> bool {
    true
}

impl SignalData {
    /// Fail-early validation of required fields, run before any theme or
    /// chart work.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.ticker.trim().is_empty() {
            return Err(RenderError::validation("ticker", "must be non-empty"));
        }
        if self.ticker.contains(char::is_whitespace) {
            return Err(RenderError::validation(
                "ticker",
                "must be a single token without whitespace",
            ));
        }
        if self.company_name.trim().is_empty() {
            return Err(RenderError::validation("company_name", "must be non-empty"));
        }
        if !(self.current_price > 0.0) {
            return Err(RenderError::validation(
                "current_price",
                format!("must be positive, got {}", self.current_price),
            ));
        }
        Ok(())
    }

    /// Event label shown in the chart block.
    pub fn event_label(&self) -> String {
        match &self.event_label {
            Some(label) => label.clone(),
            None => format!("Signal @ ${:.2}", self.current_price),
        }
    }
}
