//! Property-based tests for order aggregation.

use proptest::prelude::*;

use crate::charges::ChargeLine;
use crate::currency::Currency;

use super::aggregate::{grand_total, summarize_order};
use super::types::OrderSnapshot;

/// Strategy for a plausible charge line in any supported currency.
fn charge_line() -> impl Strategy<Value = ChargeLine> {
    (
        1u32..10_000,
        0u32..1_000_000,
        0u32..1_000_000,
        0u32..30,
        prop_oneof![
            Just(Currency::Usd),
            Just(Currency::Aed),
            Just(Currency::Eur),
            Just(Currency::Gbp),
        ],
    )
        .prop_map(|(qty_cents, sale_cents, cost_cents, vat, currency)| ChargeLine {
            description: "Freight".to_string(),
            quantity: f64::from(qty_cents) / 100.0,
            sale_rate: f64::from(sale_cents) / 100.0,
            cost_rate: f64::from(cost_cents) / 100.0,
            vat_percent: f64::from(vat),
            currency,
        })
}

fn snapshot(charges: Vec<ChargeLine>) -> OrderSnapshot {
    OrderSnapshot {
        order_number: "ORD-1".to_string(),
        execution_date: None,
        customer_name: "Customer".to_string(),
        charges,
    }
}

fn relative_close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() / scale < 1e-9
}

proptest! {
    /// Summing charges in any permutation yields the same summary row
    /// within floating-point tolerance.
    #[test]
    fn prop_aggregation_is_permutation_invariant(
        charges in prop::collection::vec(charge_line(), 0..12),
    ) {
        let forward = summarize_order(&snapshot(charges.clone()), Currency::Usd);
        let mut reversed_charges = charges;
        reversed_charges.reverse();
        let reversed = summarize_order(&snapshot(reversed_charges), Currency::Usd);

        prop_assert!(relative_close(forward.total_sale, reversed.total_sale));
        prop_assert!(relative_close(forward.total_cost, reversed.total_cost));
        prop_assert!(relative_close(forward.vat_sale, reversed.vat_sale));
        prop_assert!(relative_close(forward.vat_cost, reversed.vat_cost));
        prop_assert!(relative_close(forward.net_amount, reversed.net_amount));
    }

    /// Net amount always equals summed total sale minus summed total cost.
    #[test]
    fn prop_net_amount_is_sale_minus_cost(
        charges in prop::collection::vec(charge_line(), 0..12),
    ) {
        let row = summarize_order(&snapshot(charges), Currency::Aed);
        prop_assert!(relative_close(row.net_amount, row.total_sale - row.total_cost));
    }

    /// The grand-total row equals the column-wise sum of the rows.
    #[test]
    fn prop_grand_total_matches_column_sums(
        orders in prop::collection::vec(prop::collection::vec(charge_line(), 0..6), 0..8),
    ) {
        let rows: Vec<_> = orders
            .into_iter()
            .map(|charges| summarize_order(&snapshot(charges), Currency::Usd))
            .collect();

        let totals = grand_total(&rows);
        let expected_sale: f64 = rows.iter().map(|r| r.total_sale).sum();
        let expected_net: f64 = rows.iter().map(|r| r.net_amount).sum();

        prop_assert!(relative_close(totals.total_sale, expected_sale));
        prop_assert!(relative_close(totals.net_amount, expected_net));
    }

    /// Every monetary figure in a produced row is non-negative when all
    /// rates are non-negative, except net amount which may be a loss.
    #[test]
    fn prop_summed_amounts_are_non_negative(
        charges in prop::collection::vec(charge_line(), 0..12),
    ) {
        let row = summarize_order(&snapshot(charges), Currency::Usd);
        prop_assert!(row.total_sale >= 0.0);
        prop_assert!(row.total_cost >= 0.0);
        prop_assert!(row.vat_sale >= 0.0);
        prop_assert!(row.vat_cost >= 0.0);
    }
}
