use super::error::AppError;
use super::types::*;
use crate::{handlers::Service, storage::Todo, storage::TodoId, utils::RootSpan};
use axum::{extract::State, response::IntoResponse, Extension, Json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = Vec<Todo>),
        (status = 503, description = "Database unavailable", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
) -> Result<impl IntoResponse, AppError> {
    let items = service.todo().get_all().await?;

    root_span.record().todo_count(items.len());
    info!("Get {} ToDos", items.len());

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = Todo),
        (status = 400, description = "Invalid ID", body = AppError),
        (status = 404, description = "ToDo not found", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    PathParam(id): PathParam<TodoId>,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let todo = service.todo().get(id).await?;

    tracing::info!(todo = ?todo, "Get ToDo");

    Ok(Json(todo))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo created", body = Todo),
        (status = 400, description = "Empty or too long text", body = AppError),
        (status = 503, description = "Database unavailable", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::add", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    match service.todo().add(&input.text).await {
        Ok(todo) => {
            root_span.record().todo_id(&todo.id);
            info!(todo_id = %todo.id, "Created ToDo");
            Ok(Json(todo))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodo,
        description = "Partial ToDo update",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated", body = Todo),
        (status = 400, description = "Empty or too long text", body = AppError),
        (status = 404, description = "ToDo not found", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    PathParam(id): PathParam<TodoId>,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let todo = service.todo().update(id, &input).await?;

    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "ToDo deleted", body = MessageResponse),
        (status = 404, description = "ToDo not found", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    PathParam(id): PathParam<TodoId>,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    service.todo().delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}
