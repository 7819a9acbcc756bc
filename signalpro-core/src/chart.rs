//! Deterministic chart-series synthesis.
//!
//! `synthesize` builds a 20-point historical trajectory and three 11-point
//! forecast bands from nothing but the current price and a pattern. There is
//! no RNG and no clock: the "noise" on interior historical points is a fixed
//! sine perturbation derived from the point index, so identical inputs yield
//! bit-identical output. That determinism is what makes the render
//! fingerprint a sound cache key and the test vectors exact.

use std::f64::consts::PI;

use crate::domain::{ChartPattern, ChartSeries, PatternParams, PricePoint};
use crate::error::RenderError;

/// Historical trajectory length (indices 0..19).
pub const HISTORY_LEN: usize = 20;

/// Forecast horizon in steps. Bands hold `FORECAST_STEPS + 1` points,
/// index 0 anchored at the current price.
pub const FORECAST_STEPS: usize = 10;

/// Synthesizes the historical series and forecast bands for one signal.
///
/// Errors with `InvalidPrice` when `current_price <= 0` (NaN included).
pub fn synthesize(current_price: f64, pattern: ChartPattern) -> Result<ChartSeries, RenderError> {
    if !(current_price > 0.0) {
        return Err(RenderError::InvalidPrice(current_price));
    }
    let PatternParams { drift, volatility } = pattern.params();

    Ok(ChartSeries {
        historical: historical(current_price, drift, volatility),
        base: band(current_price, drift, volatility, Band::Base),
        bull: band(current_price, drift, volatility, Band::Bull),
        bear: band(current_price, drift, volatility, Band::Bear),
    })
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Past trajectory: starts at `current_price / (1 + drift)` and ends exactly
/// at `current_price`. Endpoints are assigned directly, never perturbed;
/// interior points ride a linear ramp plus a bounded sine wobble.
fn historical(current_price: f64, drift: f64, volatility: f64) -> Vec<PricePoint> {
    let start_price = current_price / (1.0 + drift);
    let last = HISTORY_LEN - 1;

    let mut points = Vec::with_capacity(HISTORY_LEN);
    points.push(PricePoint::new(0, start_price));
    for i in 1..last {
        let t = i as f64 / last as f64;
        let wave = current_price * volatility * (i as f64 * PI / 6.0).sin();
        points.push(PricePoint::new(i as i32, lerp(start_price, current_price, t) + wave));
    }
    points.push(PricePoint::new(last as i32, current_price));
    points
}

enum Band {
    Base,
    Bull,
    Bear,
}

fn band(current_price: f64, drift: f64, volatility: f64, which: Band) -> Vec<PricePoint> {
    let mut points = Vec::with_capacity(FORECAST_STEPS + 1);
    for j in 0..=FORECAST_STEPS {
        let progress = j as f64 / FORECAST_STEPS as f64;
        let base = current_price * (1.0 + drift * progress);
        let price = match which {
            Band::Base => base,
            Band::Bull => base * (1.0 + volatility * progress * 2.0),
            Band::Bear => base * (1.0 - volatility * progress * 2.0),
        };
        points.push(PricePoint::new(j as i32, price));
    }
    points
}
