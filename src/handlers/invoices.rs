//! Handlers for `/invoices`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use super::{AppState, DeletedResponse};
use crate::core::entity::{Invoice, InvoiceDetail, InvoiceId, InvoiceSummary};
use crate::core::error::ApiError;
use crate::core::validation::{CreateInvoiceBody, UpdateInvoiceBody, ValidatedJson};

/// `{invoices: [{id, comp_code}, ...]}`
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

/// `{invoice: {...}}`
#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T> {
    pub invoice: T,
}

/// A path segment that is not an integer cannot name an invoice
fn parse_invoice_id(raw: &str) -> Result<InvoiceId, ApiError> {
    raw.parse::<InvoiceId>()
        .map_err(|_| ApiError::invoice_not_found(raw))
}

/// List invoices ordered by company code
///
/// GET /invoices
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<InvoiceListResponse>, ApiError> {
    let invoices = state.invoices.list().await?;
    Ok(Json(InvoiceListResponse { invoices }))
}

/// Get one invoice with its company embedded
///
/// GET /invoices/{id}
///
/// The company is only looked up once the invoice is known to exist.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<InvoiceResponse<InvoiceDetail>>, ApiError> {
    let id = parse_invoice_id(&raw_id)?;

    let invoice = state
        .invoices
        .get(id)
        .await?
        .ok_or_else(|| ApiError::invoice_not_found(id))?;

    let company = state.companies.get(&invoice.comp_code).await?;

    Ok(Json(InvoiceResponse {
        invoice: InvoiceDetail::new(invoice, company),
    }))
}

/// Create an invoice
///
/// POST /invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<CreateInvoiceBody>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = state.invoices.create(new).await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// Change an invoice's amount
///
/// PUT /invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(changes): ValidatedJson<UpdateInvoiceBody>,
) -> Result<Json<InvoiceResponse<Invoice>>, ApiError> {
    let id = parse_invoice_id(&raw_id)?;

    let invoice = state
        .invoices
        .update(id, changes)
        .await?
        .ok_or_else(|| ApiError::invoice_not_found(id))?;

    tracing::info!(id = invoice.id, "invoice updated");

    Ok(Json(InvoiceResponse { invoice }))
}

/// Delete an invoice
///
/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_invoice_id(&raw_id)?;

    if !state.invoices.delete(id).await? {
        return Err(ApiError::invoice_not_found(id));
    }

    tracing::info!(id, "invoice deleted");

    Ok(Json(DeletedResponse::new()))
}
