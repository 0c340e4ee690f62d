mod todos_impl;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, instrument};

use super::{CloseStorage, HealthStorage, StorageError, TODO_TABLE};
use crate::{
    config::PostgresConfig, trace_err, utils::measure_metrics::measure_and_record_storage,
};

pub(super) static STORAGE_NAME: &str = "postgres";

const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id BIGSERIAL PRIMARY KEY,
    text VARCHAR(500) NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

pub(crate) struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Opens the pool and verifies it with a round-trip. Makes a single attempt.
    #[instrument(name = "PgStorage::connect", skip_all)]
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StorageError> {
        measure_and_record_storage(STORAGE_NAME, "PgStorage::connect", || async {
            let pool = trace_err!(
                PgPoolOptions::new()
                    .min_connections(config.pool_size)
                    .max_connections(config.max_connections())
                    .max_lifetime(config.recycle())
                    .acquire_timeout(config.connect_timeout())
                    .test_before_acquire(true)
                    .connect(&config.url)
                    .await,
                "failed to open postgres pool"
            )?;

            sqlx::query("SELECT 1").execute(&pool).await?;

            Ok::<_, StorageError>(Self { pool })
        })
        .await
    }

    #[instrument(name = "PgStorage::bootstrap_schema", skip_all)]
    pub async fn bootstrap_schema(&self) -> Result<(), StorageError> {
        measure_and_record_storage(STORAGE_NAME, "PgStorage::bootstrap_schema", || async {
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
impl HealthStorage for PgStorage {
    #[instrument(name = "PgStorage::ping", skip_all)]
    async fn ping(&self) -> Result<(), StorageError> {
        measure_and_record_storage(STORAGE_NAME, "PgStorage::ping", || async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok::<_, StorageError>(())
        })
        .await
    }
}

#[async_trait]
impl CloseStorage for PgStorage {
    #[instrument(name = "PgStorage::close", skip_all)]
    async fn close(&self) {
        self.pool.close().await;
        info!("postgres pool closed");
    }
}
