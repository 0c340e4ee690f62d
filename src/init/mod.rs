mod observability;
mod retry;
mod storage;

use crate::storage::StorageError;
use thiserror::Error;

pub use observability::{init_metrics_provider, init_stdout_tracing, init_tracer_provider};
pub use retry::RetryPolicy;
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to storage")]
    Connect(#[source] StorageError),

    #[error("Failed to bootstrap storage schema")]
    BootstrapSchema(#[source] StorageError),

    #[error("Missing storage config: {0}")]
    MissingStorageConfig(String),

    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to init tracing")]
    InitTracing(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("Failed to bridge log records into tracing")]
    InitLogTracer(#[from] tracing_log::log::SetLoggerError),

    #[error("Failed to set global tracing provider")]
    SetGlobalTracingProvider(#[from] tracing::subscriber::SetGlobalDefaultError),
}
