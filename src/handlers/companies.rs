//! Handlers for `/companies`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use super::{AppState, DeletedResponse};
use crate::core::entity::{Company, CompanyDetail, CompanySummary};
use crate::core::error::ApiError;
use crate::core::validation::{CreateCompanyBody, UpdateCompanyBody, ValidatedJson};

/// `{companies: [{code, name}, ...]}`
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

/// `{company: {...}}`
#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
    pub company: T,
}

/// List companies ordered by name
///
/// GET /companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let companies = state.companies.list().await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// Get one company with the ids of its invoices
///
/// GET /companies/{code}
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyResponse<CompanyDetail>>, ApiError> {
    let company = state
        .companies
        .get(&code)
        .await?
        .ok_or_else(|| ApiError::company_not_found(&code))?;

    let invoices = state.companies.invoice_ids(&code).await?;

    Ok(Json(CompanyResponse {
        company: CompanyDetail { company, invoices },
    }))
}

/// Create a company
///
/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<CreateCompanyBody>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state.companies.create(new).await?;

    tracing::info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// Replace a company's name and description
///
/// PUT /companies/{code}
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidatedJson(changes): ValidatedJson<UpdateCompanyBody>,
) -> Result<Json<CompanyResponse<Company>>, ApiError> {
    let company = state
        .companies
        .update(&code, changes)
        .await?
        .ok_or_else(|| ApiError::company_not_found(&code))?;

    tracing::info!(code = %company.code, "company updated");

    Ok(Json(CompanyResponse { company }))
}

/// Delete a company
///
/// DELETE /companies/{code}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.companies.delete(&code).await? {
        return Err(ApiError::company_not_found(&code));
    }

    tracing::info!(code = %code, "company deleted");

    Ok(Json(DeletedResponse::new()))
}
