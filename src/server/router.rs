//! Route table for the API

use crate::core::error::ApiError;
use crate::handlers::AppState;
use crate::handlers::companies::{
    create_company, delete_company, get_company, list_companies, update_company,
};
use crate::handlers::invoices::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the full API router
///
/// - GET/POST /companies
/// - GET/PUT/DELETE /companies/{code}
/// - GET/POST /invoices
/// - GET/PUT/DELETE /invoices/{id}
/// - GET /health, /healthz
///
/// Any other path answers with a JSON 404.
pub fn build_routes(state: AppState) -> Router {
    let companies = Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        );

    let invoices = Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        );

    companies
        .merge(invoices)
        .with_state(state)
        .merge(health_routes())
        .fallback(not_found)
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "biztime"
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
