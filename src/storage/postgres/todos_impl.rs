use async_trait::async_trait;
use tracing::{info, instrument};

use super::{PgStorage, STORAGE_NAME};
use crate::storage::{StorageError, Todo, TodoId, TodoStorage, UpdateTodo};
use crate::{trace_err, utils::measure_metrics::measure_and_record_storage};

#[async_trait]
impl TodoStorage for PgStorage {
    #[instrument(name = "PgStorage::get_all_todos", skip_all)]
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        measure_and_record_storage(STORAGE_NAME, "PgStorage::get_all_todos", || async {
            let todos = trace_err!(
                sqlx::query_as::<_, Todo>(
                    "SELECT id, text, completed FROM todos ORDER BY id ASC"
                )
                .fetch_all(&self.pool)
                .await,
                "failed to read todos"
            )?;

            Ok::<_, StorageError>(todos)
        })
        .await
    }

    #[instrument(name = "PgStorage::get_todo", skip_all)]
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError> {
        info!(todo_id = %id, "get todo");

        measure_and_record_storage(STORAGE_NAME, "PgStorage::get_todo", || async {
            sqlx::query_as::<_, Todo>("SELECT id, text, completed FROM todos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(StorageError::NotFound)
        })
        .await
    }

    #[instrument(name = "PgStorage::insert_todo", skip_all)]
    async fn insert(&self, text: &str) -> Result<Todo, StorageError> {
        measure_and_record_storage(STORAGE_NAME, "PgStorage::insert_todo", || async {
            let mut tx = self.pool.begin().await?;

            let todo = trace_err!(
                sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (text, completed)
                    VALUES ($1, FALSE)
                    RETURNING id, text, completed
                    "#,
                )
                .bind(text)
                .fetch_one(&mut *tx)
                .await,
                "failed to insert todo"
            )?;

            tx.commit().await?;

            info!(todo_id = %todo.id, "inserted todo");

            Ok::<_, StorageError>(todo)
        })
        .await
    }

    #[instrument(name = "PgStorage::update_todo", skip_all)]
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError> {
        info!(todo_id = %id, "update todo");

        measure_and_record_storage(STORAGE_NAME, "PgStorage::update_todo", || async {
            let mut tx = self.pool.begin().await?;

            let todo = trace_err!(
                sqlx::query_as::<_, Todo>(
                    r#"
                    UPDATE todos
                    SET text = COALESCE($2, text),
                        completed = COALESCE($3, completed)
                    WHERE id = $1
                    RETURNING id, text, completed
                    "#,
                )
                .bind(id)
                .bind(patch.text.as_deref())
                .bind(patch.completed)
                .fetch_optional(&mut *tx)
                .await,
                "failed to update todo"
            )?
            .ok_or(StorageError::NotFound)?;

            tx.commit().await?;

            Ok::<_, StorageError>(todo)
        })
        .await
    }

    #[instrument(name = "PgStorage::delete_todo", skip_all)]
    async fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        info!(todo_id = %id, "delete todo");

        measure_and_record_storage(STORAGE_NAME, "PgStorage::delete_todo", || async {
            let mut tx = self.pool.begin().await?;

            let deleted = trace_err!(
                sqlx::query("DELETE FROM todos WHERE id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await,
                "failed to delete todo"
            )?;

            if deleted.rows_affected() == 0 {
                return Err(StorageError::NotFound);
            }

            tx.commit().await?;

            Ok(())
        })
        .await
    }
}
