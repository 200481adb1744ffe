//! `biztime` server binary
//!
//! Reads the YAML file named by `BIZTIME_CONFIG` (optional), applies
//! environment overrides, connects to PostgreSQL and serves the API.

use anyhow::{Context, Result};
use biztime::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("BIZTIME_CONFIG").ok();
    let config = AppConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(environment = ?config.environment, "starting biztime");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(config.active_database_url())
        .await
        .context("Failed to connect to PostgreSQL")?;

    ServerBuilder::new()
        .with_store(PostgresStore::new(pool))
        .serve(&config.bind_addr)
        .await
}
