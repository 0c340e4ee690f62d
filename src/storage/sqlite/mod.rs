mod todos_impl;

#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::{info, instrument};

use super::{CloseStorage, HealthStorage, StorageError, TODO_TABLE};
use crate::{config::SqliteConfig, trace_err, utils::measure_metrics::measure_and_record_storage};

pub(super) static STORAGE_NAME: &str = "sqlite";

const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL CHECK (length(text) BETWEEN 1 AND 500),
    completed BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

pub(crate) struct SqliteStorage {
    pool: SqlitePool,
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl SqliteStorage {
    #[instrument(name = "SqliteStorage::connect", skip_all)]
    pub async fn connect(config: &SqliteConfig) -> Result<Self, StorageError> {
        measure_and_record_storage(STORAGE_NAME, "SqliteStorage::connect", || async {
            let mut options = SqlitePoolOptions::new();

            // Every connection to an in-memory database opens a fresh one,
            // so the pool must hold exactly one connection for its whole life.
            if is_in_memory(&config.url) {
                options = options
                    .min_connections(1)
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None);
            }

            let pool = trace_err!(
                options.connect(&config.url).await,
                "failed to open sqlite pool"
            )?;

            sqlx::query("SELECT 1").execute(&pool).await?;

            Ok::<_, StorageError>(Self { pool })
        })
        .await
    }

    #[instrument(name = "SqliteStorage::bootstrap_schema", skip_all)]
    pub async fn bootstrap_schema(&self) -> Result<(), StorageError> {
        measure_and_record_storage(STORAGE_NAME, "SqliteStorage::bootstrap_schema", || async {
            trace_err!(
                sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await,
                "failed to create todos table"
            )?;

            info!(table = TODO_TABLE, "schema is ready");

            Ok::<_, StorageError>(())
        })
        .await
    }
}

#[async_trait]
impl HealthStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::ping", skip_all)]
    async fn ping(&self) -> Result<(), StorageError> {
        measure_and_record_storage(STORAGE_NAME, "SqliteStorage::ping", || async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok::<_, StorageError>(())
        })
        .await
    }
}

#[async_trait]
impl CloseStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::close", skip_all)]
    async fn close(&self) {
        self.pool.close().await;
        info!("sqlite pool closed");
    }
}
