//! Derivation of the six financial amounts from a raw charge line.

use serde::Serialize;

use super::types::ChargeLine;

/// The derived financial amounts of one charge line.
///
/// No rounding is applied here; full floating-point precision is carried
/// forward and rounded to 2 decimals only at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeAmounts {
    /// quantity * sale_rate, pre-VAT.
    pub sale_amount: f64,
    /// quantity * cost_rate, pre-VAT.
    pub cost_amount: f64,
    /// VAT on the sale amount.
    pub vat_sale: f64,
    /// VAT on the cost amount.
    pub vat_cost: f64,
    /// Sale amount including VAT.
    pub total_sale: f64,
    /// Cost amount including VAT.
    pub total_cost: f64,
}

impl ChargeAmounts {
    /// Computes the derived amounts for one charge line.
    #[must_use]
    pub fn from_line(line: &ChargeLine) -> Self {
        let sale_amount = line.quantity * line.sale_rate;
        let cost_amount = line.quantity * line.cost_rate;
        let vat_sale = sale_amount * line.vat_percent / 100.0;
        let vat_cost = cost_amount * line.vat_percent / 100.0;

        Self {
            sale_amount,
            cost_amount,
            vat_sale,
            vat_cost,
            total_sale: sale_amount + vat_sale,
            total_cost: cost_amount + vat_cost,
        }
    }
}
