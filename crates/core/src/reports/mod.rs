//! Order summary report generation.
//!
//! This module turns raw per-line charge entries into sale/cost/VAT/net
//! totals, aggregates them per order, normalizes everything into one target
//! currency, and renders the result as:
//! - in-memory rows with a grand-total row (table renderer)
//! - a binary XLSX buffer (spreadsheet renderer)
//! - a UTF-8 XML document (XML renderer)

pub mod aggregate;
pub mod builder;
pub mod error;
pub mod source;
pub mod types;
pub mod xlsx;
pub mod xml;

#[cfg(test)]
mod props;

pub use aggregate::{grand_total, summarize_order};
pub use builder::ReportBuilder;
pub use error::ReportError;
pub use source::{OrderSource, SourceError};
pub use types::{OrderSnapshot, OrderSummaryRow, ReportFilter, SummaryTable, SummaryTotals};
