pub(crate) mod error;
pub(crate) mod todo;
pub mod types;

pub(crate) use crate::service::Service;
use axum::{extract::State, Json};
use error::AppError;
pub(crate) use types::*;

use crate::utils::APP_VERSION;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = AppError),
    ),
    tag = "health"
)]
#[tracing::instrument(name = "handlers::root", skip_all)]
pub(crate) async fn root(state: State<Service>) -> Result<Json<HealthResponse>, AppError> {
    health(state).await
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = AppError),
    ),
    tag = "health"
)]
#[tracing::instrument(name = "handlers::health", skip_all)]
pub(crate) async fn health(State(service): State<Service>) -> Result<Json<HealthResponse>, AppError> {
    service.check_health().await?;

    Ok(Json(HealthResponse {
        message: "Todo API is running".to_string(),
        status: "healthy".to_string(),
        database: "connected".to_string(),
        version: APP_VERSION.to_string(),
    }))
}
