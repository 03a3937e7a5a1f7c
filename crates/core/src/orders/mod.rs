//! Order input types and validation rules.
//!
//! Orders are created with a full charge set; an update replaces the whole
//! charge set atomically (full replace, never a partial-line patch).

pub mod types;
pub mod validate;

pub use types::OrderDraft;
pub use validate::{OrderValidationError, validate_draft};
