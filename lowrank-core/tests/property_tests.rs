//! Property tests for metric and ranking invariants.
//!
//! Uses proptest to verify:
//! 1. Bounds: low <= current <= high for any non-empty series
//! 2. Distance formula: pct_from_low matches its definition exactly
//! 3. Moving average: defined iff >= 200 points, mean of the last 200
//! 4. Ranking: ascending, stable, top-N is a prefix

use chrono::NaiveDate;
use lowrank_core::domain::{PriceSeries, RecordSet, StockRecord};
use lowrank_core::{compute_record, rank, top_n};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (0.01..5000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_price(), 1..max_len)
}

fn series(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_closes(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), closes)
}

fn record(ticker: String, pct: f64) -> StockRecord {
    StockRecord {
        ticker,
        current_price: 1.0,
        high_52_week: 1.0,
        low_52_week: 1.0,
        current_pct_from_low: pct,
        moving_average_200d: None,
    }
}

// ── 1–3. Metrics ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn current_within_high_low(closes in arb_closes(300)) {
        let r = compute_record("T", &series(&closes)).unwrap();
        prop_assert!(r.low_52_week <= r.current_price);
        prop_assert!(r.current_price <= r.high_52_week);
        prop_assert!(r.current_pct_from_low >= 0.0);
    }

    #[test]
    fn pct_from_low_matches_definition(closes in arb_closes(300)) {
        let r = compute_record("T", &series(&closes)).unwrap();
        let expected = (r.current_price - r.low_52_week) / r.low_52_week * 100.0;
        prop_assert_eq!(r.current_pct_from_low, expected);
    }

    #[test]
    fn moving_average_defined_iff_200_points(closes in arb_closes(400)) {
        let r = compute_record("T", &series(&closes)).unwrap();
        if closes.len() < 200 {
            prop_assert_eq!(r.moving_average_200d, None);
        } else {
            let expected = closes[closes.len() - 200..].iter().sum::<f64>() / 200.0;
            prop_assert_eq!(r.moving_average_200d, Some(expected));
        }
    }

    #[test]
    fn increasing_series_low_is_first(start in 1u32..10_000, len in 1usize..300) {
        let closes: Vec<f64> = (0..len).map(|i| (start as usize + i) as f64).collect();
        let r = compute_record("T", &series(&closes)).unwrap();
        prop_assert_eq!(r.low_52_week, closes[0]);
        prop_assert_eq!(r.high_52_week, closes[len - 1]);
        prop_assert_eq!(r.current_price, closes[len - 1]);
    }
}

// ── 4. Ranking ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rank_is_ascending_and_stable(pcts in prop::collection::vec(0u8..10, 0..40)) {
        let set: RecordSet = pcts
            .iter()
            .enumerate()
            .map(|(i, &p)| (format!("T{i:02}"), record(format!("T{i:02}"), p as f64)))
            .collect();
        let ranked = rank(&set);
        prop_assert_eq!(ranked.len(), pcts.len());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].current_pct_from_low <= pair[1].current_pct_from_low);
            if pair[0].current_pct_from_low == pair[1].current_pct_from_low {
                // Ticker names encode insertion order
                prop_assert!(pair[0].ticker < pair[1].ticker);
            }
        }
    }

    #[test]
    fn top_n_is_prefix(pcts in prop::collection::vec(0.0..100.0_f64, 0..40), n in 0usize..50) {
        let set: RecordSet = pcts
            .iter()
            .enumerate()
            .map(|(i, &p)| (format!("T{i:02}"), record(format!("T{i:02}"), p)))
            .collect();
        let ranked = rank(&set);
        let top = top_n(ranked.clone(), n);
        prop_assert_eq!(top.len(), n.min(ranked.len()));
        prop_assert_eq!(&top[..], &ranked[..top.len()]);
    }
}
