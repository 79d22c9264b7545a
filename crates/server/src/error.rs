use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use credzen_core::SimulationError;
use credzen_plaid::PlaidError;
use credzen_storage::StoreError;

/// Request-level failures. Everything not listed here is a 500 via
/// `Internal`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("monthly payment is too low to cover interest")]
    PaymentTooLow { min_payment_needed: f64 },
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> ApiError {
        match err {
            SimulationError::PaymentTooLow { min_payment_needed } => {
                ApiError::PaymentTooLow { min_payment_needed }
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> ApiError {
        ApiError::Internal(err.into())
    }
}

impl From<PlaidError> for ApiError {
    fn from(err: PlaidError) -> ApiError {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Validation outcome, not a fault: the body carries the
            // corrective hint alongside the message.
            ApiError::PaymentTooLow { min_payment_needed } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "detail": "Monthly payment is too low to cover interest.",
                    "min_payment_needed": min_payment_needed,
                })),
            )
                .into_response(),
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": detail })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
