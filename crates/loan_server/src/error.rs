//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use loan_core::types::LoanError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to callers for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Unexpected error while calculating the loan";

/// JSON error body shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message
    pub error: String,
}

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller supplied missing, malformed or out-of-range data (400)
    #[error("Invalid or missing data: {0}")]
    InvalidRequest(String),

    /// The calculation failed unexpectedly (500)
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        if err.is_input_error() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidRequest(msg) => tracing::warn!(error = %msg, "Rejected request"),
            ApiError::Internal(detail) => tracing::error!(error = %detail, "Calculation failed"),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
