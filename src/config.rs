//! Environment-driven configuration.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

/// Runtime configuration, read from process env with a `.env` fallback.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string (`DB_URL`).
    pub database_url: String,
    /// Bind address for the HTTP server (`LISTEN_ADDR`).
    pub listen_addr: SocketAddr,
    /// Pool ceiling (`DB_MAX_CONNECTIONS`).
    pub max_connections: u32,
    /// How long a caller may wait for a pooled connection before failing
    /// (`DB_ACQUIRE_TIMEOUT_SECS`).
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match std::env::var("DB_URL") {
            Ok(url) => url,
            Err(_) => {
                // Mirror the historical behavior: fall back to a .env file
                // when the variable is not already exported.
                tracing::info!("DB_URL not set, loading from .env file");
                dotenvy::dotenv().context("DB_URL unset and no .env file found")?;
                std::env::var("DB_URL").context("DB_URL missing from environment and .env")?
            }
        };

        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .map(|raw| raw.parse())
            .unwrap_or(Ok(100))
            .context("DB_MAX_CONNECTIONS is not a number")?;

        let acquire_timeout = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .map(|raw| raw.parse())
            .unwrap_or(Ok(30))
            .map(Duration::from_secs)
            .context("DB_ACQUIRE_TIMEOUT_SECS is not a number")?;

        Ok(Self {
            database_url,
            listen_addr,
            max_connections,
            acquire_timeout,
        })
    }
}
