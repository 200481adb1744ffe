//! ServerBuilder for fluent API to build HTTP servers

use super::router::build_routes;
use crate::core::{CompanyService, InvoiceService};
use crate::handlers::AppState;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    companies: Option<Arc<dyn CompanyService>>,
    invoices: Option<Arc<dyn InvoiceService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one store for both companies and invoices
    pub fn with_store<S>(mut self, store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let state = AppState::from_store(store);
        self.companies = Some(state.companies);
        self.invoices = Some(state.invoices);
        self
    }

    /// Set the company service
    pub fn with_company_service(mut self, service: impl CompanyService + 'static) -> Self {
        self.companies = Some(Arc::new(service));
        self
    }

    /// Set the invoice service
    pub fn with_invoice_service(mut self, service: impl InvoiceService + 'static) -> Self {
        self.invoices = Some(Arc::new(service));
        self
    }

    /// Add routes outside the resource table
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared handler state
    ///
    /// Both services are required.
    pub fn build_state(&mut self) -> Result<AppState> {
        let companies = self.companies.take().ok_or_else(|| {
            anyhow::anyhow!(
                "CompanyService is required. Call .with_store() or .with_company_service()"
            )
        })?;
        let invoices = self.invoices.take().ok_or_else(|| {
            anyhow::anyhow!(
                "InvoiceService is required. Call .with_store() or .with_invoice_service()"
            )
        })?;

        Ok(AppState::new(companies, invoices))
    }

    /// Build the final router with request tracing
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = build_routes(state);
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
