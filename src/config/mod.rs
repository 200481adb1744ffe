//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which database the process talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(anyhow::anyhow!("Unknown environment: {}", other)),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Database used outside of tests
    pub database_url: String,

    /// Database used when `environment` is `test`
    pub test_database_url: String,

    pub environment: Environment,

    /// Pool size
    pub max_connections: u32,

    /// How long a request waits for a pooled connection
    pub acquire_timeout_secs: u64,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            database_url: "postgresql:///biztime".to_string(),
            test_database_url: "postgresql:///biztime_test".to_string(),
            environment: Environment::Development,
            max_connections: 5,
            acquire_timeout_secs: 30,
            log_filter: "biztime=info,tower_http=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Failed to parse {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name
    ///
    /// Recognized: `BIZTIME_BIND_ADDR`, `DATABASE_URL`, `TEST_DATABASE_URL`,
    /// `BIZTIME_ENV`, `BIZTIME_MAX_CONNECTIONS`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(addr) = lookup("BIZTIME_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(url) = lookup("TEST_DATABASE_URL") {
            self.test_database_url = url;
        }
        if let Some(env) = lookup("BIZTIME_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(max) = lookup("BIZTIME_MAX_CONNECTIONS") {
            self.max_connections = max
                .parse()
                .with_context(|| format!("Invalid BIZTIME_MAX_CONNECTIONS: {}", max))?;
        }
        Ok(self)
    }

    /// The database URL for the configured environment
    pub fn active_database_url(&self) -> &str {
        match self.environment {
            Environment::Test => &self.test_database_url,
            Environment::Development | Environment::Production => &self.database_url,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
