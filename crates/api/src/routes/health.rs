//! Service health endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health probe body.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Non-deleted orders currently held by the store.
    pub orders: usize,
}

/// GET /health
///
/// Reads the store, so the probe reflects readiness rather than bare
/// process liveness.
#[axum::debug_handler]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let orders = state.store.order_count().await;
    Json(HealthResponse {
        status: "healthy",
        service: "waybill-api",
        version: env!("CARGO_PKG_VERSION"),
        orders,
    })
}

/// Creates the health routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
