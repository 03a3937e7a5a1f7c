//! Order draft validation.
//!
//! Validation is fail-fast: the draft is rejected wholesale on the first
//! violation, with a field-level message.

use thiserror::Error;

use super::types::OrderDraft;

/// Validation failure for an order draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    /// Order number was empty.
    #[error("order_number is required")]
    MissingOrderNumber,

    /// A charge line had an empty description.
    #[error("charges[{index}].description is required")]
    MissingDescription {
        /// Index of the offending charge line.
        index: usize,
    },

    /// A charge line quantity was zero, negative, or not a number.
    #[error("charges[{index}].quantity must be greater than 0")]
    NonPositiveQuantity {
        /// Index of the offending charge line.
        index: usize,
    },

    /// A rate or VAT percentage was negative or not a number.
    #[error("charges[{index}].{field} must not be negative")]
    NegativeAmount {
        /// Index of the offending charge line.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Validates an order draft for creation or full-replace update.
///
/// Quantities must be strictly positive; sale/cost rates and VAT percent may
/// be zero but not negative.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), OrderValidationError> {
    if draft.order_number.trim().is_empty() {
        return Err(OrderValidationError::MissingOrderNumber);
    }

    for (index, charge) in draft.charges.iter().enumerate() {
        if charge.description.trim().is_empty() {
            return Err(OrderValidationError::MissingDescription { index });
        }
        if !(charge.quantity > 0.0) {
            return Err(OrderValidationError::NonPositiveQuantity { index });
        }
        for (field, value) in [
            ("sale_rate", charge.sale_rate),
            ("cost_rate", charge.cost_rate),
            ("vat_percent", charge.vat_percent),
        ] {
            if !(value >= 0.0) {
                return Err(OrderValidationError::NegativeAmount { index, field });
            }
        }
    }

    Ok(())
}
