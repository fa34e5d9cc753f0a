use super::common::{created_response, decimal_positive, map_service_error, validate_input};
use crate::{errors::ApiError, handlers::AppState, services::purchase_orders::NewPurchaseOrder};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderRequest {
    pub supplier_id: i32,
    #[validate(custom = "decimal_positive")]
    pub total_amount: Decimal,
    pub order_date: NaiveDate,
    pub expected_delivery: Option<NaiveDate>,
    pub created_by: i32,
}

// Handler functions

/// Open a purchase order; the PO number is generated server-side
async fn create_purchase_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_po = NewPurchaseOrder {
        supplier_id: payload.supplier_id,
        total_amount: payload.total_amount,
        order_date: payload.order_date,
        expected_delivery: payload.expected_delivery,
        created_by: payload.created_by,
    };

    let po = state
        .services
        .purchase_orders
        .create_purchase_order(new_po)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(po))
}

/// Creates the router for purchase order endpoints
pub fn purchase_order_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_purchase_order))
}
