use super::common::{created_response, map_service_error, success_response, validate_input};
use crate::{errors::ApiError, handlers::AppState, services::suppliers::NewSupplier};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

// Handler functions

/// Create a new supplier
async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_supplier = NewSupplier {
        name: payload.name,
        contact_person: payload.contact_person,
        phone: payload.phone,
        email: payload.email,
        address: payload.address,
    };

    let supplier = state
        .services
        .suppliers
        .create_supplier(new_supplier)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(supplier))
}

/// List all suppliers
async fn list_suppliers(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state
        .services
        .suppliers
        .list_suppliers()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(suppliers))
}

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_supplier))
        .route("/", get(list_suppliers))
}
