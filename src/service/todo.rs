use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::{error::AppError, UpdateTodo},
    storage::{Todo, TodoId, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};

pub(crate) const MAX_TEXT_LEN: usize = 500;

/// Trims `text` and checks it fits the 1..=500 character range.
pub(crate) fn normalize_text(text: &str) -> Result<String, AppError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(AppError::EmptyText);
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::TextTooLong);
    }

    Ok(trimmed.to_owned())
}

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::add", skip_all)]
    pub(crate) async fn add(&self, text: &str) -> Result<Todo, AppError> {
        let text = normalize_text(text)?;
        info!(text_len = text.len(), "add todo");

        measure_and_record_service("add_todo", || async {
            self.storage.insert(&text).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::get", skip_all)]
    pub(crate) async fn get(&self, todo_id: TodoId) -> Result<Todo, AppError> {
        measure_and_record_service("get_todo", || async { self.storage.get(todo_id).await })
            .await
            .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub(crate) async fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        measure_and_record_service("get_all_todos", || async {
            self.storage.get_all().await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(
        name = "Service::todo::update",
        skip_all,
        fields(text_is_some = patch.text.is_some(),
        completed_is_some = patch.completed.is_some()))
    ]
    pub(crate) async fn update(&self, id: TodoId, patch: &UpdateTodo) -> Result<Todo, AppError> {
        info!(todo_id = %id, "update todo");

        let patch = crate::storage::UpdateTodo {
            text: patch.text.as_deref().map(normalize_text).transpose()?,
            completed: patch.completed,
        };

        if patch.is_empty() {
            return self.get(id).await;
        }

        measure_and_record_service("update_todo", || async {
            self.storage.update(id, patch).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, todo_id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %todo_id, "delete todo");

        measure_and_record_service("delete_todo", || async {
            self.storage.delete(todo_id).await
        })
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::TestStorageBuilder;

    async fn service_todo() -> ServiceTodoRef {
        let builder = TestStorageBuilder::new().await;
        ServiceTodoRef::new(builder.build_todo().await)
    }

    #[test]
    fn normalize_text_trims() {
        assert_eq!(normalize_text("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn normalize_text_rejects_blank() {
        assert!(matches!(normalize_text(""), Err(AppError::EmptyText)));
        assert!(matches!(normalize_text(" \t\n "), Err(AppError::EmptyText)));
    }

    #[test]
    fn normalize_text_length_bounds() {
        assert!(normalize_text(&"a".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(matches!(
            normalize_text(&"a".repeat(MAX_TEXT_LEN + 1)),
            Err(AppError::TextTooLong)
        ));
        // limit is in characters, not bytes
        assert!(normalize_text(&"é".repeat(MAX_TEXT_LEN)).is_ok());
        // surrounding whitespace does not count
        assert!(normalize_text(&format!("  {}  ", "a".repeat(MAX_TEXT_LEN))).is_ok());
    }

    #[tokio::test]
    async fn add_rejects_empty_text_without_writing() {
        let service = service_todo().await;

        assert!(matches!(service.add("   ").await, Err(AppError::EmptyText)));
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_invalid_text_keeps_item() {
        let service = service_todo().await;
        let todo = service.add("aaa").await.unwrap();

        let result = service
            .update(
                todo.id,
                &UpdateTodo {
                    text: Some("  ".to_string()),
                    completed: Some(true),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::EmptyText)));

        assert_eq!(service.get(todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn empty_patch_returns_current_item() {
        let service = service_todo().await;
        let todo = service.add("aaa").await.unwrap();

        let patch = UpdateTodo {
            text: None,
            completed: None,
        };
        assert_eq!(service.update(todo.id, &patch).await.unwrap(), todo);

        let result = service.update(TodoId::from(99), &patch).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
