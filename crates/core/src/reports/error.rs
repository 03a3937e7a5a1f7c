//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::source::SourceError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The order-retrieval collaborator failed; no partial output is emitted.
    #[error("Order retrieval failed: {0}")]
    Source(#[from] SourceError),

    /// Spreadsheet or XML serialization failed.
    #[error("Report rendering failed: {0}")]
    Render(String),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Render(err.to_string())
    }
}
