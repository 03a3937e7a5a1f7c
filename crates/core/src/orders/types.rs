//! Order input types.

use chrono::NaiveDate;
use serde::Deserialize;
use waybill_shared::types::CustomerId;

use crate::charges::ChargeLine;

/// Input for creating an order, or fully replacing one on update.
///
/// Update semantics are a documented full replace: the order fields and the
/// entire charge list are swapped out atomically. Callers must not assume
/// partial-update behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    /// Customer placing the order.
    pub customer_id: CustomerId,
    /// Unique order number (required).
    pub order_number: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Date the order was executed, if known.
    pub execution_date: Option<NaiveDate>,
    /// Ordered charge lines. May be empty.
    #[serde(default)]
    pub charges: Vec<ChargeLine>,
}
