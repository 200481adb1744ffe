//! Core module containing the row types, service traits, errors and
//! request validation

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::{
    Company, CompanyChanges, CompanyDetail, CompanySummary, Invoice, InvoiceChanges,
    InvoiceDetail, InvoiceId, InvoiceSummary, NewCompany, NewInvoice,
};
pub use error::{ApiError, ValidationError};
pub use service::{CompanyService, InvoiceService};
