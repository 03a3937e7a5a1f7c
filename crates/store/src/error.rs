//! Store error types.

use thiserror::Error;
use waybill_core::orders::OrderValidationError;
use waybill_shared::types::{CustomerId, OrderId};

/// Errors raised by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Customer not found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Order not found (or soft-deleted).
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Another order already uses this order number.
    #[error("Order number already exists: {0}")]
    DuplicateOrderNumber(String),

    /// The submitted order draft failed validation.
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    /// Customer name was empty.
    #[error("customer_name is required")]
    MissingCustomerName,
}
