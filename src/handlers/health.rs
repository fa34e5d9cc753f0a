use super::common::success_response;
use crate::{
    errors::{ApiError, ServiceError},
    handlers::AppState,
};
use axum::{extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Liveness probe: pings the database and reports a timestamp
pub async fn healthcheck(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    crate::db::check_connection(&state.db)
        .await
        .map_err(|e| ApiError::ServiceError(ServiceError::InternalError(e.to_string())))?;

    Ok(success_response(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
