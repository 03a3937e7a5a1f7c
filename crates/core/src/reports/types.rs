//! Report data types.

use chrono::NaiveDate;
use serde::Serialize;

use crate::charges::ChargeLine;

use super::error::ReportError;

/// One order as handed to the engine by the order-retrieval collaborator.
///
/// The snapshot is finite and already consistent: soft-deleted orders are
/// excluded and quantities are pre-validated.
#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    /// Unique order number.
    pub order_number: String,
    /// Execution date, if the order has one.
    pub execution_date: Option<NaiveDate>,
    /// Name of the customer the order belongs to.
    pub customer_name: String,
    /// Raw charge lines of the order.
    pub charges: Vec<ChargeLine>,
}

/// One computed summary row, expressed in exactly one target currency.
///
/// Derived and discarded after render, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummaryRow {
    /// Order number.
    pub order_number: String,
    /// Execution date. Serialized as an ISO date string, empty for
    /// orders without one, matching the XLSX and XML renderers.
    #[serde(serialize_with = "serialize_date_text")]
    pub execution_date: Option<NaiveDate>,
    /// Customer name.
    pub customer_name: String,
    /// Summed sale total including VAT.
    pub total_sale: f64,
    /// Summed cost total including VAT.
    pub total_cost: f64,
    /// Summed VAT on sales.
    pub vat_sale: f64,
    /// Summed VAT on costs.
    pub vat_cost: f64,
    /// total_sale - total_cost (profit, not a tax-net figure).
    pub net_amount: f64,
}

impl OrderSummaryRow {
    /// Execution date as an ISO date string, empty when the order has none.
    #[must_use]
    pub fn execution_date_text(&self) -> String {
        self.execution_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

fn serialize_date_text<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_str(""),
    }
}

/// Grand-total row: arithmetic sum of every numeric column across all rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryTotals {
    /// Sum of total_sale across rows.
    pub total_sale: f64,
    /// Sum of total_cost across rows.
    pub total_cost: f64,
    /// Sum of vat_sale across rows.
    pub vat_sale: f64,
    /// Sum of vat_cost across rows.
    pub vat_cost: f64,
    /// Sum of net_amount across rows.
    pub net_amount: f64,
}

/// Table renderer output: the row sequence plus a computed grand-total row.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    /// Summary rows in the builder's stated order.
    pub rows: Vec<OrderSummaryRow>,
    /// Grand totals (all-zero when there are no rows).
    pub totals: SummaryTotals,
}

/// Optional date-range filter for a report request.
///
/// The filter is active only when both bounds are present; both bounds are
/// inclusive. Orders with no execution date cannot satisfy a range
/// comparison and are excluded whenever the filter is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter {
    /// Inclusive start of the execution-date range.
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the execution-date range.
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    /// Returns the inclusive bounds when both are present.
    #[must_use]
    pub const fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whether the date filter applies (both bounds supplied).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.bounds().is_some()
    }

    /// Rejects ranges whose start is after their end.
    pub fn validate(&self) -> Result<(), ReportError> {
        if let Some((start, end)) = self.bounds() {
            if start > end {
                return Err(ReportError::InvalidDateRange { start, end });
            }
        }
        Ok(())
    }
}
