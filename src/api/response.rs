//! Response types for the Settlement Comparator API.
//!
//! This module defines the error response structures and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was left blank", field),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::MissingField { field } => Self::bad_request(ApiError::missing_field(field)),
            EngineError::InvalidAmount { .. } => {
                Self::bad_request(ApiError::new("INVALID_AMOUNT", message))
            }
            EngineError::InvalidDate { .. } => {
                Self::bad_request(ApiError::new("INVALID_DATE", message))
            }
            EngineError::InvalidDateRange { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE_RANGE",
                message,
                "The exit date must be on or after the hire date",
            )),
            EngineError::InvalidReason { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_REASON",
                message,
                "Expected one of: harassment, wage_delay, fund_non_payment, voluntary_exit",
            )),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            EngineError::Telemetry { .. }
            | EngineError::Io(_)
            | EngineError::Serialization(_) => Self::internal(ApiError::with_details(
                "INTERNAL_ERROR",
                "Internal error",
                message,
            )),
        }
    }
}
