use super::common::{
    created_response, decimal_positive, map_service_error, success_response, validate_input,
};
use crate::{
    entities::drug::DrugCategory,
    errors::ApiError,
    handlers::AppState,
    services::drugs::NewDrug,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDrugRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub active_ingredient: String,
    #[validate(length(min = 1))]
    pub producer: String,
    pub category: DrugCategory,
    #[validate(length(min = 1))]
    pub unit: String,
    #[validate(custom = "decimal_positive")]
    pub purchase_price: Decimal,
    #[validate(custom = "decimal_positive")]
    pub prescription_price: Decimal,
    #[validate(custom = "decimal_positive")]
    pub general_price: Decimal,
    #[validate(custom = "decimal_positive")]
    pub insurance_price: Decimal,
    pub barcode: Option<String>,
    #[validate(range(min = 0))]
    pub minimum_stock: i32,
    pub storage_location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

// Handler functions

/// Create a new drug
async fn create_drug(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDrugRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_drug = NewDrug {
        name: payload.name,
        active_ingredient: payload.active_ingredient,
        producer: payload.producer,
        category: payload.category,
        unit: payload.unit,
        purchase_price: payload.purchase_price,
        prescription_price: payload.prescription_price,
        general_price: payload.general_price,
        insurance_price: payload.insurance_price,
        barcode: payload.barcode,
        minimum_stock: payload.minimum_stock,
        storage_location: payload.storage_location,
    };

    let drug = state
        .services
        .drugs
        .create_drug(new_drug)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(drug))
}

/// List the whole catalog
async fn list_drugs(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let drugs = state
        .services
        .drugs
        .list_drugs()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(drugs))
}

/// Search drugs by name, active ingredient or barcode
async fn search_drugs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let drugs = state
        .services
        .drugs
        .search_drugs(&params.q)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(drugs))
}

/// Drugs below their minimum stock threshold
async fn low_stock_drugs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let drugs = state
        .services
        .drugs
        .low_stock_drugs()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(drugs))
}

/// Batches of one drug, expiration ascending
async fn list_drug_batches(
    State(state): State<Arc<AppState>>,
    Path(drug_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let batches = state
        .services
        .batches
        .get_batches_by_drug(drug_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(batches))
}

/// Creates the router for drug endpoints
pub fn drug_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_drug))
        .route("/", get(list_drugs))
        .route("/search", get(search_drugs))
        .route("/low-stock", get(low_stock_drugs))
        .route("/:id/batches", get(list_drug_batches))
}
