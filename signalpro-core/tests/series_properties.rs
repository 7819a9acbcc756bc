//! Property tests for chart-series invariants.
//!
//! Uses proptest to verify, for arbitrary valid prices and patterns:
//! 1. Band ordering — bull >= base >= bear >= 0 at every forecast step
//! 2. Anchoring — historical endpoints and band origins are exact
//! 3. Determinism — identical inputs yield bit-identical series

use proptest::prelude::*;
use signalpro_core::chart::{self, FORECAST_STEPS, HISTORY_LEN};
use signalpro_core::domain::ChartPattern;

fn arb_price() -> impl Strategy<Value = f64> {
    // Cents to six figures, rounded to cents like real quotes.
    (0.01..1_000_000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_pattern() -> impl Strategy<Value = ChartPattern> {
    prop_oneof![
        Just(ChartPattern::Momentum),
        Just(ChartPattern::Breakout),
        Just(ChartPattern::Volatile),
        Just(ChartPattern::Decline),
    ]
}

proptest! {
    #[test]
    fn band_ordering_holds(price in arb_price(), pattern in arb_pattern()) {
        let series = chart::synthesize(price, pattern).unwrap();
        for j in 0..=FORECAST_STEPS {
            prop_assert!(series.bull[j].price >= series.base[j].price);
            prop_assert!(series.base[j].price >= series.bear[j].price);
            prop_assert!(series.bear[j].price >= 0.0);
        }
    }

    #[test]
    fn endpoints_are_exact(price in arb_price(), pattern in arb_pattern()) {
        let series = chart::synthesize(price, pattern).unwrap();
        let drift = pattern.params().drift;

        prop_assert_eq!(series.historical.len(), HISTORY_LEN);
        prop_assert_eq!(series.historical[0].price, price / (1.0 + drift));
        prop_assert_eq!(series.historical[HISTORY_LEN - 1].price, price);

        prop_assert_eq!(series.base[0].price, price);
        prop_assert_eq!(series.bull[0].price, price);
        prop_assert_eq!(series.bear[0].price, price);
    }

    #[test]
    fn series_lengths_are_fixed(price in arb_price(), pattern in arb_pattern()) {
        let series = chart::synthesize(price, pattern).unwrap();
        prop_assert_eq!(series.base.len(), FORECAST_STEPS + 1);
        prop_assert_eq!(series.bull.len(), FORECAST_STEPS + 1);
        prop_assert_eq!(series.bear.len(), FORECAST_STEPS + 1);

        // Indices are contiguous from zero in every sequence.
        for (i, point) in series.historical.iter().enumerate() {
            prop_assert_eq!(point.index, i as i32);
        }
        for (j, point) in series.base.iter().enumerate() {
            prop_assert_eq!(point.index, j as i32);
        }
    }

    #[test]
    fn synthesis_is_reproducible(price in arb_price(), pattern in arb_pattern()) {
        let a = chart::synthesize(price, pattern).unwrap();
        let b = chart::synthesize(price, pattern).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn non_positive_prices_always_fail(price in -1_000_000.0..=0.0_f64) {
        prop_assert!(chart::synthesize(price, ChartPattern::Breakout).is_err());
    }
}
