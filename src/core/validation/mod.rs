//! Request-body validation
//!
//! Each endpoint that accepts a body declares a typed schema whose fields
//! are all optional on the wire. The [`ValidatedJson`] extractor parses the
//! body, checks that the required fields are present and hands the handler
//! the checked domain value.

pub mod bodies;
pub mod extractor;

pub use bodies::{
    CreateCompanyBody, CreateInvoiceBody, RequestBody, UpdateCompanyBody, UpdateInvoiceBody,
    check_body,
};
pub use extractor::ValidatedJson;
