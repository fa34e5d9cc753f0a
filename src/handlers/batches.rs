use super::common::{
    created_response, decimal_positive, map_service_error, success_response, validate_input,
};
use crate::{errors::ApiError, handlers::AppState, services::batches::NewBatch};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBatchRequest {
    pub drug_id: i32,
    #[validate(length(min = 1))]
    pub batch_number: String,
    pub expiration_date: NaiveDate,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom = "decimal_positive")]
    pub purchase_price: Decimal,
    pub supplier_id: i32,
    pub received_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

fn default_months_ahead() -> u32 {
    6
}

// Handler functions

/// Record a received batch
async fn create_batch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_batch = NewBatch {
        drug_id: payload.drug_id,
        batch_number: payload.batch_number,
        expiration_date: payload.expiration_date,
        quantity: payload.quantity,
        purchase_price: payload.purchase_price,
        supplier_id: payload.supplier_id,
        received_date: payload.received_date,
    };

    let batch = state
        .services
        .batches
        .create_batch(new_batch)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(batch))
}

/// Get a batch by ID
async fn get_batch(
    State(state): State<Arc<AppState>>,
    Path(batch_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let batch = state
        .services
        .batches
        .get_batch(batch_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Batch with id {} not found", batch_id)))?;

    Ok(success_response(batch))
}

/// Batches expiring within the coming months
async fn expiring_batches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpiringQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let batches = state
        .services
        .batches
        .get_expiring_batches(params.months_ahead)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(batches))
}

/// Creates the router for batch endpoints
pub fn batch_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_batch))
        .route("/expiring", get(expiring_batches))
        .route("/:id", get(get_batch))
}
