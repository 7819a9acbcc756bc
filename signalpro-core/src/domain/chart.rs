//! Chart-side domain types: patterns, points, and the synthesized series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Shape of the synthesized price trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPattern {
    Momentum,
    Breakout,
    Volatile,
    Decline,
}

/// Drift and volatility for one pattern, both fractional over the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParams {
    pub drift: f64,
    pub volatility: f64,
}

impl ChartPattern {
    pub const ALL: [ChartPattern; 4] = [
        Self::Momentum,
        Self::Breakout,
        Self::Volatile,
        Self::Decline,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Momentum => "momentum",
            Self::Breakout => "breakout",
            Self::Volatile => "volatile",
            Self::Decline => "decline",
        }
    }

    /// Pattern parameter table.
    pub fn params(self) -> PatternParams {
        match self {
            Self::Momentum => PatternParams { drift: 0.35, volatility: 0.03 },
            Self::Breakout => PatternParams { drift: 0.20, volatility: 0.05 },
            Self::Volatile => PatternParams { drift: 0.05, volatility: 0.12 },
            Self::Decline => PatternParams { drift: -0.30, volatility: 0.04 },
        }
    }
}

impl fmt::Display for ChartPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ChartPattern {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "momentum" => Ok(Self::Momentum),
            "breakout" => Ok(Self::Breakout),
            "volatile" => Ok(Self::Volatile),
            "decline" => Ok(Self::Decline),
            _ => Err(RenderError::UnknownPattern(s.to_string())),
        }
    }
}

/// One chart point. Historical indices run 0..19; forecast indices 0..10
/// with index 0 anchored at the current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub index: i32,
    pub price: f64,
}

impl PricePoint {
    pub fn new(index: i32, price: f64) -> Self {
        Self { index, price }
    }
}

/// Synthesized past trajectory plus forecast bands.
///
/// Invariants (upheld by `chart::synthesize`, re-checked in tests):
/// - `historical.len() == 20`, ending exactly at the current price
/// - `base`, `bull`, `bear` each hold 11 points (index 0..10)
/// - `base[0] == bull[0] == bear[0] == historical[19]` (continuity)
/// - `bull[j] >= base[j] >= bear[j] >= 0` for every step j
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub historical: Vec<PricePoint>,
    pub base: Vec<PricePoint>,
    pub bull: Vec<PricePoint>,
    pub bear: Vec<PricePoint>,
}

impl ChartSeries {
    /// Price column of one band, in index order. Used when embedding the
    /// dataset into the document script block.
    pub fn prices(points: &[PricePoint]) -> Vec<f64> {
        points.iter().map(|p| p.price).collect()
    }

    /// The anchor price shared by `historical[19]` and all band index-0 points.
    pub fn anchor_price(&self) -> f64 {
        self.base[0].price
    }
}
