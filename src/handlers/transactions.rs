use super::common::{
    created_response, decimal_non_negative, decimal_positive, map_service_error, validate_input,
};
use crate::{
    entities::transaction::{PaymentMethod, TransactionType},
    errors::ApiError,
    handlers::AppState,
    services::transactions::{NewTransaction, NewTransactionItem},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub customer_id: Option<i32>,
    pub doctor_name: Option<String>,
    pub patient_name: Option<String>,
    #[validate(custom = "decimal_positive")]
    pub subtotal: Decimal,
    #[validate(custom = "decimal_non_negative")]
    pub discount_amount: Decimal,
    #[validate(custom = "decimal_positive")]
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub cashier_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionItemRequest {
    pub drug_id: i32,
    pub batch_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom = "decimal_positive")]
    pub unit_price: Decimal,
    #[validate(custom = "decimal_non_negative")]
    pub discount_amount: Decimal,
    #[validate(custom = "decimal_positive")]
    pub subtotal: Decimal,
}

// Handler functions

/// Record a checkout transaction
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_transaction = NewTransaction {
        transaction_type: payload.transaction_type,
        customer_id: payload.customer_id,
        doctor_name: payload.doctor_name,
        patient_name: payload.patient_name,
        subtotal: payload.subtotal,
        discount_amount: payload.discount_amount,
        total_amount: payload.total_amount,
        payment_method: payload.payment_method,
        cashier_id: payload.cashier_id,
    };

    let transaction = state
        .services
        .transactions
        .create_transaction(new_transaction)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(transaction))
}

/// Record one sale line; deducts the quantity from its batch
async fn create_transaction_item(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<i32>,
    Json(payload): Json<CreateTransactionItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_item = NewTransactionItem {
        transaction_id,
        drug_id: payload.drug_id,
        batch_id: payload.batch_id,
        quantity: payload.quantity,
        unit_price: payload.unit_price,
        discount_amount: payload.discount_amount,
        subtotal: payload.subtotal,
    };

    let item = state
        .services
        .transactions
        .create_transaction_item(new_item)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(item))
}

/// Creates the router for transaction endpoints
pub fn transaction_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_transaction))
        .route("/:id/items", post(create_transaction_item))
}
