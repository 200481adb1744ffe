//! Row types for the `companies` and `invoices` tables and the shapes the
//! handlers return.
//!
//! Every type here serializes to the exact JSON object that appears inside a
//! response envelope, so handlers never build JSON by hand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generated primary key of an invoice row (`SERIAL`).
pub type InvoiceId = i32;

/// A full `companies` row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// The `{code, name}` projection used by the company list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// A company together with the ids of the invoices billed to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,

    /// Invoice ids in insertion order
    pub invoices: Vec<InvoiceId>,
}

/// Fields required to insert a company.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl From<NewCompany> for Company {
    fn from(new: NewCompany) -> Self {
        Self {
            code: new.code,
            name: new.name,
            description: new.description,
        }
    }
}

/// Mutable company fields. The code itself never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyChanges {
    pub name: String,
    pub description: String,
}

/// A full `invoices` row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: InvoiceId,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// The `{id, comp_code}` projection used by the invoice list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub comp_code: String,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

/// An invoice with its company embedded in place of `comp_code`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: InvoiceId,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,

    /// `None` only if the company vanished between the two reads
    pub company: Option<Company>,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Option<Company>) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// Fields required to insert an invoice. Everything else takes store defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// The only mutable invoice field.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceChanges {
    pub amt: f64,
}
