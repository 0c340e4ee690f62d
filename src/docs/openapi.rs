use utoipa::OpenApi;

use crate::handlers::error::AppError;
use crate::handlers::types::{CreateTodo, HealthResponse, MessageResponse, UpdateTodo};
use crate::storage::Todo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::todo::get_all,
        crate::handlers::todo::get,
        crate::handlers::todo::add,
        crate::handlers::todo::update,
        crate::handlers::todo::delete,
    ),
    components(
        schemas(AppError, Todo, CreateTodo, UpdateTodo, MessageResponse, HealthResponse),
    ),
    tags(
        (name = "health", description = "Service and database health"),
        (name = "todos", description = "Endpoints to create and manage todo items"),
    ),
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "A simple Todo API backed by a relational database"
    )
)]
pub struct ApiDoc;
