//! Order summary report routes.
//!
//! All three renderers are built from the same computed row sequence:
//! JSON rows with a grand-total row for the UI table, an XLSX attachment,
//! and an XML attachment. Buffers are returned atomically; a failed
//! request never yields a partial file.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;

use waybill_core::currency::Currency;
use waybill_core::reports::{OrderSource, ReportBuilder, ReportFilter};

use crate::AppState;

use super::{error_response, report_error_response};

/// Spreadsheet MIME type for XLSX attachments.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/order-summary", get(order_summary))
        .route("/reports/order-summary/xlsx", get(order_summary_xlsx))
        .route("/reports/order-summary/xml", get(order_summary_xml))
}

/// Query parameters for the order summary report.
#[derive(Debug, Deserialize)]
pub struct OrderSummaryQuery {
    /// Inclusive start of the execution-date range (ISO date).
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the execution-date range (ISO date).
    pub end_date: Option<NaiveDate>,
    /// Target currency: USD or AED. Defaults to USD.
    pub currency: Option<String>,
}

impl OrderSummaryQuery {
    fn filter(&self) -> ReportFilter {
        ReportFilter {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Parses and restricts the target currency to the supported pair.
    fn target_currency(&self) -> Result<Currency, Response> {
        let code = self.currency.as_deref().unwrap_or("USD");
        match Currency::from_str(code) {
            Ok(currency @ (Currency::Usd | Currency::Aed)) => Ok(currency),
            Ok(other) => Err(error_response(
                StatusCode::BAD_REQUEST,
                "validation_error",
                &format!("currency must be USD or AED, got {other}"),
            )),
            Err(err) => Err(error_response(
                StatusCode::BAD_REQUEST,
                "currency_error",
                &err.to_string(),
            )),
        }
    }
}

fn builder(state: &AppState) -> ReportBuilder {
    let source: Arc<dyn OrderSource> = state.store.clone();
    ReportBuilder::new(source)
}

/// GET /reports/order-summary
///
/// Returns the summary rows plus a grand-total row as JSON.
#[axum::debug_handler]
async fn order_summary(
    State(state): State<AppState>,
    Query(query): Query<OrderSummaryQuery>,
) -> Response {
    let target = match query.target_currency() {
        Ok(target) => target,
        Err(response) => return response,
    };

    match builder(&state).summary_table(query.filter(), target).await {
        Ok(table) => axum::Json(table).into_response(),
        Err(err) => report_error_response(&err),
    }
}

/// GET /reports/order-summary/xlsx
///
/// Returns the report as a spreadsheet attachment.
#[axum::debug_handler]
async fn order_summary_xlsx(
    State(state): State<AppState>,
    Query(query): Query<OrderSummaryQuery>,
) -> Response {
    let target = match query.target_currency() {
        Ok(target) => target,
        Err(response) => return response,
    };

    match builder(&state).summary_xlsx(query.filter(), target).await {
        Ok(buffer) => attachment(XLSX_CONTENT_TYPE, "orders.xlsx", buffer),
        Err(err) => report_error_response(&err),
    }
}

/// GET /reports/order-summary/xml
///
/// Returns the report as a UTF-8 XML attachment.
#[axum::debug_handler]
async fn order_summary_xml(
    State(state): State<AppState>,
    Query(query): Query<OrderSummaryQuery>,
) -> Response {
    let target = match query.target_currency() {
        Ok(target) => target,
        Err(response) => return response,
    };

    match builder(&state).summary_xml(query.filter(), target).await {
        Ok(buffer) => attachment("application/xml; charset=utf-8", "orders.xml", buffer),
        Err(err) => report_error_response(&err),
    }
}

fn attachment(content_type: &str, filename: &str, buffer: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        buffer,
    )
        .into_response()
}
