//! # BizTime
//!
//! A JSON API over two related tables, `companies` and `invoices`.
//!
//! ## Layout
//!
//! - [`core`]: row types, the `CompanyService` / `InvoiceService` traits,
//!   `ApiError` and the request-body checks
//! - [`storage`]: `PostgresStore` (feature `postgres`) and `InMemoryStore`
//! - [`handlers`]: one axum handler per verb and resource
//! - [`server`]: `ServerBuilder` and the route table
//! - [`config`]: `AppConfig`, loaded from YAML plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryStore::seeded())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod handlers;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Company, CompanyChanges, CompanyDetail, CompanyService, CompanySummary,
        Invoice, InvoiceChanges, InvoiceDetail, InvoiceId, InvoiceService, InvoiceSummary,
        NewCompany, NewInvoice, ValidationError,
    };

    // === Handlers ===
    pub use crate::handlers::AppState;

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, Environment};

    // === Server ===
    pub use crate::server::{ServerBuilder, build_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
