use super::TodoId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
pub struct Todo {
    #[schema(value_type = i64)]
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Default)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}
