use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::submission_repository::StoreError;

/// Postgres' unique-violation code. Clients already treat it as "already
/// registered", so the SQLite store reports duplicates the same way.
pub const DUPLICATE_CODE: &str = "23505";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Invalid(String),
    #[error("This email address is already registered")]
    Duplicate,
    #[error("Internal server error")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ApiError::Duplicate,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("database task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": message})),
            )
                .into_response(),
            ApiError::Duplicate => (
                StatusCode::CONFLICT,
                Json(json!({"error": ApiError::Duplicate.to_string(), "code": DUPLICATE_CODE})),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
