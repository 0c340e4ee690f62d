use crate::storage::StorageError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strum_macros::AsRefStr;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, AsRefStr, ToSchema)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Todo not found")]
    NotFound,

    #[error("Todo text cannot be empty")]
    EmptyText,

    #[error("Todo text cannot exceed 500 characters")]
    TextTooLong,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[schema(value_type = String)]
    #[error("Database connection failed")]
    StorageUnavailable(#[source] StorageError),

    #[error("Service unhealthy: {0}")]
    Unhealthy(String),

    #[schema(value_type = String)]
    #[error("Internal server error")]
    InternalStorage(#[source] StorageError),

    #[error("Internal server error")]
    Unexpected(String),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound => Self::NotFound,
            StorageError::Unavailable(_) => Self::StorageUnavailable(value),
            StorageError::Internal(_) => Self::InternalStorage(value),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        Self::InvalidPath(value.body_text())
    }
}

impl AppError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::EmptyText
            | AppError::TextTooLong
            | AppError::InvalidBody { .. }
            | AppError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable { .. } | AppError::Unhealthy { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::InternalStorage { .. } | AppError::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "AppError");
        } else {
            tracing::warn!(error = ?self, "AppError");
        }

        let body = Json(json!({
            "error": self.as_ref(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EmptyText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::TextTooLong.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(StorageError::Unavailable(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(StorageError::Internal(sqlx::Error::RowNotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::from(StorageError::Internal(sqlx::Error::Protocol(
            "secret detail".into(),
        )));

        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.as_ref(), "internal_storage");
    }

    #[tokio::test]
    async fn internal_storage_response_is_generic() {
        let response = AppError::from(StorageError::Internal(sqlx::Error::Protocol(
            "secret detail".into(),
        )))
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "error": "internal_storage", "message": "Internal server error" })
        );
    }

    #[test]
    fn text_too_long_message() {
        assert_eq!(
            AppError::TextTooLong.to_string(),
            "Todo text cannot exceed 500 characters"
        );
    }
}
