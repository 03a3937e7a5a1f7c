//! API route definitions.

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use waybill_core::reports::ReportError;
use waybill_store::StoreError;

use crate::AppState;

pub mod customers;
pub mod health;
pub mod orders;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(customers::routes())
        .merge(orders::routes())
        .merge(reports::routes())
}

/// Builds a JSON error response body.
pub(crate) fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message
        })),
    )
        .into_response()
}

/// Maps a store error to an HTTP response.
pub(crate) fn store_error_response(err: &StoreError) -> Response {
    match err {
        StoreError::CustomerNotFound(_) | StoreError::OrderNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", &err.to_string())
        }
        StoreError::DuplicateOrderNumber(_) => {
            error_response(StatusCode::CONFLICT, "conflict", &err.to_string())
        }
        StoreError::Validation(_) | StoreError::MissingCustomerName => {
            error_response(StatusCode::BAD_REQUEST, "validation_error", &err.to_string())
        }
    }
}

/// Maps a report error to an HTTP response.
///
/// Upstream and render failures are logged and surfaced as a generic
/// failure; no partial report is ever returned.
pub(crate) fn report_error_response(err: &ReportError) -> Response {
    match err {
        ReportError::InvalidDateRange { .. } => {
            error_response(StatusCode::BAD_REQUEST, "validation_error", &err.to_string())
        }
        ReportError::Source(_) | ReportError::Render(_) => {
            error!(error = %err, "failed to generate report");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Failed to generate report",
            )
        }
    }
}
