//! Per-line charge financial calculation.
//!
//! A charge line is one billable/cost item on an order (freight, handling,
//! etc.). The calculator derives sale/cost/VAT/total amounts from the raw
//! line; derived amounts are never stored or edited directly.

pub mod calculator;
pub mod types;

pub use calculator::ChargeAmounts;
pub use types::ChargeLine;
