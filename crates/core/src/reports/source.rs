//! Contract for the order-retrieval collaborator.

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use super::types::OrderSnapshot;

/// Failure of the order-retrieval collaborator.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SourceError(pub String);

/// Supplies order snapshots to the report builder.
///
/// Implementations must return a finite, already-consistent snapshot in a
/// single call (no streaming merge of partial pages), excluding soft-deleted
/// orders. When both bounds are given, only orders whose execution date
/// falls within the inclusive range are returned, which excludes orders
/// without an execution date.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetches orders, optionally restricted to an inclusive date range.
    async fn fetch_in_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<OrderSnapshot>, SourceError>;
}
