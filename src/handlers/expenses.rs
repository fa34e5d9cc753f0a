use super::common::{created_response, decimal_positive, map_service_error, validate_input};
use crate::{
    entities::expense::ExpenseType,
    errors::ApiError,
    handlers::AppState,
    services::expenses::NewExpense,
};
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
pub struct CreateExpenseRequest {
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(custom = "decimal_positive")]
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub created_by: i32,
}

// Handler functions

/// Record an operational expense
async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let new_expense = NewExpense {
        expense_type: payload.expense_type,
        description: payload.description,
        amount: payload.amount,
        expense_date: payload.expense_date,
        created_by: payload.created_by,
    };

    let expense = state
        .services
        .expenses
        .create_expense(new_expense)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(expense))
}

/// Creates the router for expense endpoints
pub fn expense_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_expense))
}
