//! HTTP error handling and response types.
//!
//! Failure reporting follows the historical public API: inputs rejected
//! during number/unit extraction answer with HTTP 200 and a fixed plain-text
//! body, while failures after extraction answer with HTTP 400 and a JSON
//! envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ConversionError;

/// Plain-text bodies pinned by the public API contract.
const INVALID_NUMBER: &str = "invalid number";
const INVALID_UNIT: &str = "invalid unit";
const INVALID_NUMBER_AND_UNIT: &str = "invalid number and unit";

/// JSON error envelope for request failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Input rejected during extraction; answered as 200 plain text
    InvalidInput(&'static str),
    /// Request failed after extraction
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(body) => (StatusCode::OK, body).into_response(),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ApiError::new(message))).into_response()
            }
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidNumber { .. } => AppError::InvalidInput(INVALID_NUMBER),
            ConversionError::UnknownUnit { .. } => AppError::InvalidInput(INVALID_UNIT),
            ConversionError::InvalidNumberAndUnit { .. } => {
                AppError::InvalidInput(INVALID_NUMBER_AND_UNIT)
            }
            ConversionError::EmptyInput | ConversionError::NoConversionPath { .. } => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}
