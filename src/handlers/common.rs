use crate::errors::{ApiError, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Monetary amounts must be strictly positive
pub fn decimal_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than zero".into());
        Err(err)
    }
}

/// Discounts may be zero but never negative
pub fn decimal_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(decimal_positive(&dec!(0.01)).is_ok());
        assert!(decimal_positive(&Decimal::ZERO).is_err());
        assert!(decimal_positive(&dec!(-1)).is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(decimal_non_negative(&Decimal::ZERO).is_ok());
        assert!(decimal_non_negative(&dec!(-0.01)).is_err());
    }
}
