use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AppError;

/// `axum::Json` with rejections reported as `AppError::InvalidBody`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub(crate) struct JsonBody<T>(pub T);

/// `axum::extract::Path` with rejections reported as `AppError::InvalidPath`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub(crate) struct PathParam<T>(pub T);

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateTodo {
    pub text: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub database: String,
    pub version: String,
}
