//! Service traits for company and invoice persistence

use crate::core::entity::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceChanges, InvoiceId, InvoiceSummary,
    NewCompany, NewInvoice,
};
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for the `companies` table
///
/// Each method maps to a single statement. `Ok(None)` / `Ok(false)` means no
/// row matched; `Err` is reserved for store failures.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List every company, ordered by name ascending
    async fn list(&self) -> Result<Vec<CompanySummary>>;

    /// Get a company by its code
    async fn get(&self, code: &str) -> Result<Option<Company>>;

    /// Ids of the invoices billed to `code`, in insertion order
    async fn invoice_ids(&self, code: &str) -> Result<Vec<InvoiceId>>;

    /// Insert a company and return the stored row
    async fn create(&self, company: NewCompany) -> Result<Company>;

    /// Update name and description; `None` if the code does not exist
    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>>;

    /// Delete a company; `false` if the code does not exist
    async fn delete(&self, code: &str) -> Result<bool>;
}

/// Service trait for the `invoices` table
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// List every invoice, ordered by company code ascending
    async fn list(&self) -> Result<Vec<InvoiceSummary>>;

    /// Get an invoice by id
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>>;

    /// Insert an invoice; paid, add_date and paid_date take store defaults
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Update the amount; `None` if the id does not exist
    async fn update(&self, id: InvoiceId, changes: InvoiceChanges) -> Result<Option<Invoice>>;

    /// Delete an invoice; `false` if the id does not exist
    async fn delete(&self, id: InvoiceId) -> Result<bool>;
}
