//! Typed request bodies, one per verb/entity pair
//!
//! Presence is the only rule: a field that is absent or `null` is missing.
//! Values are not range-checked here; the store enforces its own constraints.

use crate::core::entity::{CompanyChanges, InvoiceChanges, NewCompany, NewInvoice};
use crate::core::error::ValidationError;
use serde::Deserialize;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde_json::Value;

/// A request body schema with a set of required fields
pub trait RequestBody: DeserializeOwned + Send {
    /// The value handed to the handler once every required field is present
    type Checked: Send;

    /// Fixed message returned when a required field is missing
    const MISSING_FIELDS: &'static str;

    /// Returns `None` if any required field is missing
    fn into_checked(self) -> Option<Self::Checked>;
}

/// Check a raw JSON body against the schema `B`
pub fn check_body<B: RequestBody>(payload: Value) -> Result<B::Checked, ValidationError> {
    if !payload.is_object() {
        return Err(ValidationError::MissingBody);
    }

    let body: B = serde_json::from_value(payload)
        .map_err(|e| ValidationError::InvalidBody(e.to_string()))?;

    body.into_checked()
        .ok_or(ValidationError::MissingFields(B::MISSING_FIELDS))
}

/// `POST /companies`
#[derive(Debug, Default, Deserialize)]
pub struct CreateCompanyBody {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RequestBody for CreateCompanyBody {
    type Checked = NewCompany;

    const MISSING_FIELDS: &'static str = "Body must include code, name, and description";

    fn into_checked(self) -> Option<NewCompany> {
        Some(NewCompany {
            code: self.code?,
            name: self.name?,
            description: self.description?,
        })
    }
}

/// `PUT /companies/{code}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RequestBody for UpdateCompanyBody {
    type Checked = CompanyChanges;

    const MISSING_FIELDS: &'static str = "Body must include name and description";

    fn into_checked(self) -> Option<CompanyChanges> {
        Some(CompanyChanges {
            name: self.name?,
            description: self.description?,
        })
    }
}

/// An amount as sent by clients: a JSON number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountValue {
    Number(f64),
    Text(String),
}

/// Accepts `200`, `200.5` and `"200"`; `null` or absent is `None`
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AmountValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AmountValue::Number(amt)) => Ok(Some(amt)),
        Some(AmountValue::Text(text)) => match text.trim().parse::<f64>() {
            Ok(amt) if amt.is_finite() => Ok(Some(amt)),
            _ => Err(de::Error::custom(format!("invalid amount: {:?}", text))),
        },
    }
}

/// `POST /invoices`
#[derive(Debug, Default, Deserialize)]
pub struct CreateInvoiceBody {
    pub comp_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amt: Option<f64>,
}

impl RequestBody for CreateInvoiceBody {
    type Checked = NewInvoice;

    const MISSING_FIELDS: &'static str = "Body must include comp_code and amt";

    fn into_checked(self) -> Option<NewInvoice> {
        Some(NewInvoice {
            comp_code: self.comp_code?,
            amt: self.amt?,
        })
    }
}

/// `PUT /invoices/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInvoiceBody {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amt: Option<f64>,
}

impl RequestBody for UpdateInvoiceBody {
    type Checked = InvoiceChanges;

    const MISSING_FIELDS: &'static str = "Body must include amt";

    fn into_checked(self) -> Option<InvoiceChanges> {
        Some(InvoiceChanges { amt: self.amt? })
    }
}
