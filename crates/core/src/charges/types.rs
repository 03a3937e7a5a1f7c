//! Charge line input type.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// One raw charge line on an order.
///
/// Immutable once created. The six derived amounts (sale, cost, VAT and
/// totals) are computed by [`super::ChargeAmounts`], never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// What the charge is for (e.g. "Ocean freight").
    pub description: String,
    /// Billed quantity. Strictly positive at order-creation time.
    pub quantity: f64,
    /// Sale rate per unit (may be zero).
    pub sale_rate: f64,
    /// Cost rate per unit (may be zero).
    pub cost_rate: f64,
    /// VAT percentage applied to both sale and cost amounts (may be zero).
    pub vat_percent: f64,
    /// Currency the rates are expressed in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

const fn default_currency() -> Currency {
    Currency::Usd
}
