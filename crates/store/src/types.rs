//! Stored entity types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use waybill_core::charges::ChargeLine;
use waybill_shared::types::{CustomerId, OrderId};

/// A customer record.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,
    /// Customer display name.
    pub customer_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A stored shipment order with its full charge set.
///
/// Charges hold only the raw line values; the six derived amounts are
/// computed by the report engine, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    /// Order ID.
    pub id: OrderId,
    /// Customer the order belongs to.
    pub customer_id: CustomerId,
    /// Customer display name at read time.
    pub customer_name: String,
    /// Unique order number.
    pub order_number: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Execution date, if known.
    pub execution_date: Option<NaiveDate>,
    /// Charge lines in submission order.
    pub charges: Vec<ChargeLine>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
