use super::common::{created_response, map_service_error, validate_input};
use crate::{errors::ApiError, handlers::AppState, services::customers::NewCustomer};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub insurance_info: Option<String>,
}

// Handler functions

/// Create a new customer
async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_customer = NewCustomer {
        name: payload.name,
        phone: payload.phone,
        email: payload.email,
        address: payload.address,
        insurance_info: payload.insurance_info,
    };

    let customer = state
        .services
        .customers
        .create_customer(new_customer)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(customer))
}

/// Creates the router for customer endpoints
pub fn customer_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_customer))
}
