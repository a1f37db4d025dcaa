//! Property-based tests for cross-rate math.

use proptest::prelude::*;

use super::RateTable;
use crate::reference::{AVAILABLE_CURRENCIES, BASE_CURRENCY, reference_rates};

const TOLERANCE: f64 = 1e-9;

/// Relative closeness check for products of floating-point ratios.
fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

/// Strategy to pick a currency quoted in the reference table.
fn quoted_code() -> impl Strategy<Value = &'static str> {
    (0..AVAILABLE_CURRENCIES.len()).prop_map(|i| AVAILABLE_CURRENCIES[i].code)
}

/// Strategy to generate a three-letter code absent from the reference table.
fn unknown_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}".prop_filter("code must be unknown", |code| !reference_rates().contains(code))
}

/// Strategy to generate arbitrary valid tables with the base pinned at 1.0.
fn arbitrary_table() -> impl Strategy<Value = RateTable> {
    prop::collection::btree_map("[A-Z]{3}", 0.0001f64..10_000.0, 1..12).prop_map(|mut rates| {
        rates.insert(BASE_CURRENCY.to_owned(), 1.0);
        RateTable::new(rates).expect("generated rates are positive and finite")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Converting a currency into itself is exactly 1, quoted or not.
    #[test]
    fn prop_identity_pair_is_exactly_one(code in "[A-Z]{3}") {
        prop_assert_eq!(reference_rates().cross_rate(&code, &code), 1.0);
    }

    /// Converting there and back cancels out within tolerance.
    #[test]
    fn prop_round_trip_cancels(a in quoted_code(), b in quoted_code()) {
        let there = reference_rates().cross_rate(a, b);
        let back = reference_rates().cross_rate(b, a);
        prop_assert!(close(there * back, 1.0), "{a}->{b} gave {there} and back {back}");
    }

    /// Stepping through an intermediate currency matches the direct rate.
    #[test]
    fn prop_transitive_through_intermediate(
        a in quoted_code(),
        b in quoted_code(),
        c in quoted_code(),
    ) {
        let direct = reference_rates().cross_rate(a, c);
        let stepped = reference_rates().cross_rate(a, b) * reference_rates().cross_rate(b, c);
        prop_assert!(close(stepped, direct), "stepped {stepped} vs direct {direct}");
    }

    /// Unquoted codes behave as base parity against the base currency.
    #[test]
    fn prop_unknown_code_is_base_parity(code in unknown_code()) {
        prop_assert_eq!(reference_rates().cross_rate(&code, BASE_CURRENCY), 1.0);
        prop_assert_eq!(reference_rates().cross_rate(BASE_CURRENCY, &code), 1.0);
    }

    /// Every cross rate over a valid table is strictly positive.
    #[test]
    fn prop_cross_rates_are_positive(table in arbitrary_table(), a in "[A-Z]{3}", b in "[A-Z]{3}") {
        prop_assert!(table.cross_rate(&a, &b) > 0.0);
    }

    /// Round trips cancel on arbitrary tables too, unknown codes included.
    #[test]
    fn prop_round_trips_cancel_everywhere(
        table in arbitrary_table(),
        a in "[A-Z]{3}",
        b in "[A-Z]{3}",
    ) {
        let product = table.cross_rate(&a, &b) * table.cross_rate(&b, &a);
        prop_assert!(close(product, 1.0), "round trip left {product}");
    }

    /// Transitivity holds on arbitrary tables too, unknown codes included.
    #[test]
    fn prop_transitivity_holds_everywhere(
        table in arbitrary_table(),
        a in "[A-Z]{3}",
        b in "[A-Z]{3}",
        c in "[A-Z]{3}",
    ) {
        let direct = table.cross_rate(&a, &c);
        let stepped = table.cross_rate(&a, &b) * table.cross_rate(&b, &c);
        prop_assert!(close(stepped, direct), "stepped {stepped} vs direct {direct}");
    }

    /// The empty table neutralizes every pair.
    #[test]
    fn prop_empty_table_is_neutral(a in "[A-Z]{3}", b in "[A-Z]{3}") {
        prop_assert_eq!(RateTable::empty().cross_rate(&a, &b), 1.0);
    }
}
