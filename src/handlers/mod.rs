//! HTTP handlers for the company and invoice resources
//!
//! Handlers receive the injected services through [`AppState`], run the
//! body checks via the `ValidatedJson` extractor and return
//! `Result<_, ApiError>`.

pub mod companies;
pub mod invoices;

use crate::core::{CompanyService, InvoiceService};
use serde::Serialize;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyService>,
    pub invoices: Arc<dyn InvoiceService>,
}

impl AppState {
    pub fn new(companies: Arc<dyn CompanyService>, invoices: Arc<dyn InvoiceService>) -> Self {
        Self {
            companies,
            invoices,
        }
    }

    /// Build the state from one store implementing both services
    pub fn from_store<S>(store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let store = Arc::new(store);
        Self {
            companies: store.clone(),
            invoices: store,
        }
    }
}

/// Response body of both delete endpoints
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
