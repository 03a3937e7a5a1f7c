//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for customers, orders, and reports
//! - Error-to-response mapping
//! - The shared application state

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use waybill_store::MemoryStore;

/// Application state shared across handlers.
///
/// The store is an explicitly constructed, injected instance, never a
/// module-level singleton, so tests can wire their own.
#[derive(Clone)]
pub struct AppState {
    /// Order and customer store.
    pub store: Arc<MemoryStore>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
