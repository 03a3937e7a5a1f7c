//! Per-order aggregation of charge amounts.

use crate::charges::ChargeAmounts;
use crate::currency::{Currency, convert};

use super::types::{OrderSnapshot, OrderSummaryRow, SummaryTotals};

/// Sums the converted charge amounts of one order into a summary row.
///
/// For each charge line the six derived amounts are computed, converted into
/// the target currency using the line's own currency as source, then summed
/// across lines. The net amount is computed once, after summation, as
/// summed total sale minus summed total cost. Summation order does not
/// affect the result beyond standard floating-point rounding noise.
///
/// An order with zero charge lines yields a row with all monetary fields 0.
#[must_use]
pub fn summarize_order(order: &OrderSnapshot, target: Currency) -> OrderSummaryRow {
    let mut total_sale = 0.0;
    let mut total_cost = 0.0;
    let mut vat_sale = 0.0;
    let mut vat_cost = 0.0;

    for line in &order.charges {
        let amounts = ChargeAmounts::from_line(line);
        total_sale += convert(amounts.total_sale, line.currency, target);
        total_cost += convert(amounts.total_cost, line.currency, target);
        vat_sale += convert(amounts.vat_sale, line.currency, target);
        vat_cost += convert(amounts.vat_cost, line.currency, target);
    }

    OrderSummaryRow {
        order_number: order.order_number.clone(),
        execution_date: order.execution_date,
        customer_name: order.customer_name.clone(),
        total_sale,
        total_cost,
        vat_sale,
        vat_cost,
        net_amount: total_sale - total_cost,
    }
}

/// Computes the grand-total row across all summary rows.
///
/// Zero rows produce all-zero totals, not an error.
#[must_use]
pub fn grand_total(rows: &[OrderSummaryRow]) -> SummaryTotals {
    let mut totals = SummaryTotals::default();
    for row in rows {
        totals.total_sale += row.total_sale;
        totals.total_cost += row.total_cost;
        totals.vat_sale += row.vat_sale;
        totals.vat_cost += row.vat_cost;
        totals.net_amount += row.net_amount;
    }
    totals
}
