//! Report orchestration: fetch orders, aggregate, render.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::currency::Currency;

use super::aggregate::{grand_total, summarize_order};
use super::error::ReportError;
use super::source::OrderSource;
use super::types::{OrderSummaryRow, ReportFilter, SummaryTable};
use super::{xlsx, xml};

/// Builds order summary reports from an injected order source.
///
/// The builder holds no mutable state; each invocation computes entirely
/// over its own fetched snapshot, so concurrent report requests are
/// independent. All renderers consume the same row sequence and return
/// their output atomically - a failed request never yields a partial
/// buffer.
pub struct ReportBuilder {
    source: Arc<dyn OrderSource>,
}

impl ReportBuilder {
    /// Creates a builder over the given order source.
    #[must_use]
    pub fn new(source: Arc<dyn OrderSource>) -> Self {
        Self { source }
    }

    /// Produces the summary rows for the given filter and target currency.
    ///
    /// Ordering contract (deterministic, not an artifact of storage order):
    /// - active date filter: order number ascending;
    /// - no filter: execution date descending, orders without an execution
    ///   date last, ties broken by order number ascending.
    pub async fn summary_rows(
        &self,
        filter: ReportFilter,
        target: Currency,
    ) -> Result<Vec<OrderSummaryRow>, ReportError> {
        filter.validate()?;

        let (start, end) = (filter.start_date, filter.end_date);
        let snapshots = self.source.fetch_in_range(start, end).await?;
        debug!(orders = snapshots.len(), %target, "aggregating order summary");

        let mut rows: Vec<OrderSummaryRow> = snapshots
            .iter()
            .filter(|order| {
                // The source contract already applies the range; re-check here
                // so the stated semantics hold for any source implementation.
                match filter.bounds() {
                    Some((start, end)) => order
                        .execution_date
                        .is_some_and(|date| date >= start && date <= end),
                    None => true,
                }
            })
            .map(|order| summarize_order(order, target))
            .collect();

        if filter.is_active() {
            rows.sort_by(|a, b| a.order_number.cmp(&b.order_number));
        } else {
            rows.sort_by(|a, b| {
                match (a.execution_date, b.execution_date) {
                    (Some(x), Some(y)) => y.cmp(&x),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
                .then_with(|| a.order_number.cmp(&b.order_number))
            });
        }

        Ok(rows)
    }

    /// Table renderer: rows plus a computed grand-total row.
    pub async fn summary_table(
        &self,
        filter: ReportFilter,
        target: Currency,
    ) -> Result<SummaryTable, ReportError> {
        let rows = self.summary_rows(filter, target).await?;
        let totals = grand_total(&rows);
        Ok(SummaryTable { rows, totals })
    }

    /// Spreadsheet renderer: a complete XLSX workbook as a binary buffer.
    pub async fn summary_xlsx(
        &self,
        filter: ReportFilter,
        target: Currency,
    ) -> Result<Vec<u8>, ReportError> {
        let rows = self.summary_rows(filter, target).await?;
        xlsx::render(&rows)
    }

    /// XML renderer: a UTF-8 XML document as a binary buffer.
    pub async fn summary_xml(
        &self,
        filter: ReportFilter,
        target: Currency,
    ) -> Result<Vec<u8>, ReportError> {
        let rows = self.summary_rows(filter, target).await?;
        xml::render(&rows)
    }
}
