//! Axum extractor for validated request bodies
//!
//! This module provides the `ValidatedJson<T>` extractor that parses and
//! checks a request payload before it reaches the handler.

use super::bodies::{RequestBody, check_body};
use crate::core::error::ValidationError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Axum extractor yielding the checked value of the body schema `T`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_invoice(
///     State(state): State<AppState>,
///     ValidatedJson(new): ValidatedJson<CreateInvoiceBody>,
/// ) -> Result<impl IntoResponse, ApiError> {
///     // `new` is a NewInvoice with comp_code and amt present
/// }
/// ```
pub struct ValidatedJson<T: RequestBody>(pub T::Checked);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestBody,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Missing content type, empty body and malformed JSON all land here
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|_| ValidationError::MissingBody)?;

        check_body::<T>(payload).map(ValidatedJson)
    }
}
