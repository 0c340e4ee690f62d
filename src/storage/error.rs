use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Error, Debug, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("Internal storage error: {0}")]
    Internal(#[source] sqlx::Error),
}

/// SQLSTATE classes for a lost or refused connection: `08` (connection
/// exception) and `57P` (operator intervention, e.g. admin shutdown).
fn is_connection_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("57P")
}

impl From<sqlx::Error> for StorageError {
    fn from(value: sqlx::Error) -> Self {
        let connection_lost = match &value {
            sqlx::Error::Database(db_err) => db_err
                .code()
                .is_some_and(|code| is_connection_sqlstate(&code)),
            _ => false,
        };

        match value {
            sqlx::Error::RowNotFound => {
                tracing::warn!(error = ?value, "Record not found by id");
                Self::NotFound
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                tracing::error!(error = ?value, "Storage unavailable");
                Self::Unavailable(value)
            }
            sqlx::Error::Database(_) if connection_lost => {
                tracing::error!(error = ?value, "Storage unavailable");
                Self::Unavailable(value)
            }
            _ => {
                tracing::error!(error = ?value, "Storage error");
                Self::Internal(value)
            }
        }
    }
}
