use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "./db/journal.db";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = match lookup("JOURNAL_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid JOURNAL_LISTEN_ADDR: {addr}"))?,
            None => {
                let port = match lookup("PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .with_context(|| format!("Invalid PORT: {port}"))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };
        let db_path = lookup("JOURNAL_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = lookup("JOURNAL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("JOURNAL_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
