use super::common::{map_service_error, success_response};
use crate::{errors::ApiError, handlers::AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DailySalesQuery {
    pub date: NaiveDate,
}

// Handler functions

/// Revenue summary for one calendar day, bucketed by payment method
async fn daily_sales_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailySalesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .services
        .reports
        .daily_sales_summary(params.date)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(summary))
}

/// Creates the router for report endpoints
pub fn report_routes() -> Router<Arc<AppState>> {
    Router::new().route("/daily-sales", get(daily_sales_summary))
}
