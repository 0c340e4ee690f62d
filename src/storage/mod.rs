mod error;
mod ids;
mod postgres;
mod sqlite;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use sqlite::test_util;

use async_trait::async_trait;
pub use error::StorageError;
pub use ids::TodoId;
pub(crate) use postgres::PgStorage;
pub(crate) use sqlite::SqliteStorage;
pub use todo::Todo;
pub(crate) use todo::UpdateTodo;

pub(crate) static TODO_TABLE: &str = "todos";

#[async_trait]
pub trait TodoStorage: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError>;
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError>;
    async fn insert(&self, text: &str) -> Result<Todo, StorageError>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError>;
    async fn delete(&self, id: TodoId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait HealthStorage: Send + Sync {
    async fn ping(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CloseStorage: Send + Sync {
    async fn close(&self);
}
