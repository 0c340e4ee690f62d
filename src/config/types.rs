use std::{fmt, net::SocketAddr, time::Duration};

use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::utils::redact_url;

#[derive(Debug, Deserialize, Copy, Clone, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    Postgres,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageKind,
    pub postgres: Option<PostgresConfig>,
    pub sqlite: Option<SqliteConfig>,
    pub connect_retry: RetrySettings,
    pub schema_retry: RetrySettings,
}

#[derive(Clone, Deserialize)]
pub struct PostgresConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_overflow: u32,
    pub recycle_sec: u64,
    pub connect_timeout_sec: u64,
}

impl PostgresConfig {
    pub fn max_connections(&self) -> u32 {
        self.pool_size + self.max_overflow
    }

    pub fn recycle(&self) -> Duration {
        Duration::from_secs(self.recycle_sec)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_sec)
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("url", &redact_url(&self.url))
            .field("pool_size", &self.pool_size)
            .field("max_overflow", &self.max_overflow)
            .field("recycle_sec", &self.recycle_sec)
            .field("connect_timeout_sec", &self.connect_timeout_sec)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SqliteConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub multiplier: f64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub tracing_endpoint: String,
    pub tracing_sampling_rate: f64,
    pub metrics_endpoint: String,
    pub stdout_tracing: bool,
    pub tracing: bool,
    pub metrics: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}
