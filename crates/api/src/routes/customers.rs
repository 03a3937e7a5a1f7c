//! Customer management routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use waybill_store::Customer;

use crate::AppState;

use super::store_error_response;

/// Creates the customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/customers", get(list_customers))
}

/// Request body for creating a customer.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    /// Customer display name.
    pub customer_name: String,
}

/// POST /customers
#[axum::debug_handler]
async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomerRequest>,
) -> impl IntoResponse {
    match state.store.create_customer(&body.customer_name).await {
        Ok(customer) => {
            info!(customer_id = %customer.id, "customer created via API");
            (StatusCode::CREATED, Json(customer)).into_response()
        }
        Err(err) => store_error_response(&err),
    }
}

/// GET /customers
#[axum::debug_handler]
async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.store.list_customers().await)
}
