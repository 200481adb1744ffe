//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, implementing both `CompanyService` and
//! `InvoiceService` against the `companies` and `invoices` tables of the
//! reference schema (`data.sql`) via a shared `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag.
//!
//! Every method issues exactly one parameterized statement. Nothing is
//! wrapped in a transaction.

use crate::core::entity::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceChanges, InvoiceId, InvoiceSummary,
    NewCompany, NewInvoice,
};
use crate::core::{CompanyService, InvoiceService};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Company and invoice storage backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx::PgPool;
/// use biztime::storage::PostgresStore;
///
/// let pool = PgPool::connect("postgresql:///biztime").await?;
/// let store = PostgresStore::new(pool);
/// let companies = CompanyService::list(&store).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyService for PostgresStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name
               FROM companies
               ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list companies")
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description
               FROM companies
               WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch company")
    }

    async fn invoice_ids(&self, code: &str) -> Result<Vec<InvoiceId>> {
        sqlx::query_scalar::<_, InvoiceId>(
            "SELECT id
               FROM invoices
               WHERE comp_code = $1
               ORDER BY id",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch company invoices")
    }

    async fn create(&self, company: NewCompany) -> Result<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description)
               VALUES ($1, $2, $3)
               RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert company")
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies
               SET name = $1, description = $2
               WHERE code = $3
               RETURNING code, name, description",
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update company")
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let deleted = sqlx::query_scalar::<_, String>(
            "DELETE FROM companies
               WHERE code = $1
               RETURNING code",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete company")?;

        Ok(deleted.is_some())
    }
}

#[async_trait]
impl InvoiceService for PostgresStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        sqlx::query_as::<_, InvoiceSummary>(
            "SELECT id, comp_code
               FROM invoices
               ORDER BY comp_code, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list invoices")
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date
               FROM invoices
               WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch invoice")
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (comp_code, amt)
               VALUES ($1, $2)
               RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert invoice")
    }

    async fn update(&self, id: InvoiceId, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices
               SET amt = $1
               WHERE id = $2
               RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(changes.amt)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update invoice")
    }

    async fn delete(&self, id: InvoiceId) -> Result<bool> {
        let deleted = sqlx::query_scalar::<_, InvoiceId>(
            "DELETE FROM invoices
               WHERE id = $1
               RETURNING id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete invoice")?;

        Ok(deleted.is_some())
    }
}
