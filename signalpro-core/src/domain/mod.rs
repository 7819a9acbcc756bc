//! Domain types: the signal record and the synthesized chart series.

mod chart;
mod signal;

pub use chart::{ChartPattern, ChartSeries, PatternParams, PricePoint};
pub use signal::{KeyStat, Priority, SignalCategory, SignalData, StrategyInfo};
