//! Order management routes.
//!
//! Order updates are a documented full replace: the submitted draft swaps
//! out the order fields and the entire charge list atomically. There are no
//! partial-line patch semantics.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use uuid::Uuid;

use waybill_core::orders::OrderDraft;
use waybill_shared::types::{OrderId, PageRequest};

use crate::AppState;

use super::store_error_response;

/// Creates the order routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders", get(list_orders))
        .route("/orders/{order_id}", get(get_order))
        .route("/orders/{order_id}", put(update_order))
        .route("/orders/{order_id}", delete(delete_order))
}

/// POST /orders
#[axum::debug_handler]
async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> impl IntoResponse {
    match state.store.create_order(draft).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => store_error_response(&err),
    }
}

/// GET /orders?page=&per_page=&search=
#[axum::debug_handler]
async fn list_orders(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    Json(state.store.list_orders(&page).await)
}

/// GET /orders/{order_id}
#[axum::debug_handler]
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get_order(OrderId::from_uuid(order_id)).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => store_error_response(&err),
    }
}

/// PUT /orders/{order_id} - full replace.
#[axum::debug_handler]
async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(draft): Json<OrderDraft>,
) -> impl IntoResponse {
    match state
        .store
        .update_order(OrderId::from_uuid(order_id), draft)
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(err) => store_error_response(&err),
    }
}

/// DELETE /orders/{order_id} - soft delete.
#[axum::debug_handler]
async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.delete_order(OrderId::from_uuid(order_id)).await {
        Ok(()) => Json(json!({ "deleted": true })).into_response(),
        Err(err) => store_error_response(&err),
    }
}
