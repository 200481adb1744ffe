//! Typed error handling for the API
//!
//! Handlers return `Result<_, ApiError>`. The two client-facing kinds carry
//! their message to the caller; anything else is an `Internal` error whose
//! cause is logged and replaced by a generic message on the wire.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_company(code: &str) -> Result<Company, ApiError> {
//!     service
//!         .get(code)
//!         .await?
//!         .ok_or_else(|| ApiError::company_not_found(code))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt::Display;

/// The error type returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is missing or lacks required fields
    #[error("{0}")]
    BadRequest(String),

    /// The referenced company code or invoice id does not exist
    #[error("{0}")]
    NotFound(String),

    /// Unclassified failure, usually from the store
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn company_not_found(code: &str) -> Self {
        ApiError::NotFound(format!("No company with code: {}", code))
    }

    pub fn invoice_not_found(id: impl Display) -> Self {
        ApiError::NotFound(format!("No invoice with id: {}", id))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the JSON error envelope
    pub fn to_response(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
                status: self.status_code().as_u16(),
            },
        }
    }
}

/// `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// HTTP status, repeated in the body
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            tracing::error!(error = %cause, "request failed");
        }
        let status = self.status_code();
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Failures of the request-body checks
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// No body, a non-JSON body, or a body that is not an object
    #[error("Request must include body")]
    MissingBody,

    /// One or more required fields are absent; carries the fixed message
    #[error("{0}")]
    MissingFields(&'static str),

    /// A field has the wrong JSON type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
