//! In-memory implementation of the company and invoice services for testing
//! and development

use crate::core::entity::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceChanges, InvoiceId, InvoiceSummary,
    NewCompany, NewInvoice,
};
use crate::core::{CompanyService, InvoiceService};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    // Keyed by id, so iteration order is insertion order
    invoices: BTreeMap<InvoiceId, Invoice>,
    next_invoice_id: InvoiceId,
}

/// In-memory store implementation
///
/// Holds both tables behind one RwLock and mirrors the constraints of the
/// reference schema: unique company code and name, invoice foreign key with
/// cascading delete, and a positive amount.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the same rows as the `data.sql` seed
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut tables = store
                .tables
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            for (code, name, description) in [
                ("apple", "Apple Computer", "Maker of OSX."),
                ("ibm", "IBM", "Big blue."),
            ] {
                tables.companies.insert(
                    code.to_string(),
                    Company {
                        code: code.to_string(),
                        name: name.to_string(),
                        description: description.to_string(),
                    },
                );
            }

            let today = Utc::now().date_naive();
            for (comp_code, amt, paid) in [
                ("apple", 100.0, false),
                ("apple", 200.0, false),
                ("apple", 300.0, true),
                ("ibm", 400.0, false),
            ] {
                tables.next_invoice_id += 1;
                let id = tables.next_invoice_id;
                tables.invoices.insert(
                    id,
                    Invoice {
                        id,
                        comp_code: comp_code.to_string(),
                        amt,
                        paid,
                        add_date: today,
                        paid_date: paid.then(|| {
                            chrono::NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or(today)
                        }),
                    },
                );
            }
        }
        store
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))
    }
}

#[async_trait]
impl CompanyService for InMemoryStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        let tables = self.read()?;

        let mut companies: Vec<CompanySummary> =
            tables.companies.values().map(CompanySummary::from).collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(companies)
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        Ok(self.read()?.companies.get(code).cloned())
    }

    async fn invoice_ids(&self, code: &str) -> Result<Vec<InvoiceId>> {
        Ok(self
            .read()?
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == code)
            .map(|invoice| invoice.id)
            .collect())
    }

    async fn create(&self, company: NewCompany) -> Result<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            bail!("duplicate key value violates unique constraint \"companies_pkey\"");
        }
        if tables.companies.values().any(|c| c.name == company.name) {
            bail!("duplicate key value violates unique constraint \"companies_name_key\"");
        }

        let company = Company::from(company);
        tables
            .companies
            .insert(company.code.clone(), company.clone());

        Ok(company)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(code) {
            return Ok(None);
        }
        if tables
            .companies
            .values()
            .any(|c| c.code != code && c.name == changes.name)
        {
            bail!("duplicate key value violates unique constraint \"companies_name_key\"");
        }

        Ok(tables.companies.get_mut(code).map(|company| {
            company.name = changes.name;
            company.description = changes.description;
            company.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let mut tables = self.write()?;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);

        Ok(true)
    }
}

#[async_trait]
impl InvoiceService for InMemoryStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        let tables = self.read()?;

        // Stable sort keeps id order within a company
        let mut invoices: Vec<InvoiceSummary> =
            tables.invoices.values().map(InvoiceSummary::from).collect();
        invoices.sort_by(|a, b| a.comp_code.cmp(&b.comp_code));

        Ok(invoices)
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        Ok(self.read()?.invoices.get(&id).cloned())
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&invoice.comp_code) {
            bail!(
                "insert or update on table \"invoices\" violates foreign key constraint \"invoices_comp_code_fkey\""
            );
        }
        check_amount(invoice.amt)?;

        tables.next_invoice_id += 1;
        let invoice = Invoice {
            id: tables.next_invoice_id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn update(&self, id: InvoiceId, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amount(changes.amt)?;
        invoice.amt = changes.amt;

        Ok(Some(invoice.clone()))
    }

    async fn delete(&self, id: InvoiceId) -> Result<bool> {
        Ok(self.write()?.invoices.remove(&id).is_some())
    }
}

fn check_amount(amt: f64) -> Result<()> {
    if amt > 0.0 {
        Ok(())
    } else {
        bail!("new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"")
    }
}
