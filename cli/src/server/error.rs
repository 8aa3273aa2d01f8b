use attendly_core::AttendanceError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{context}: {cause}")]
    Internal {
        context: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    /// Maps a service failure, using `context` as the message for store errors.
    pub fn from_service(err: AttendanceError, context: &'static str) -> Self {
        match err {
            AttendanceError::Store(cause) => AppError::Internal { context, cause },
            other => AppError::BadRequest(other.to_string()),
        }
    }

    pub fn join(err: tokio::task::JoinError, context: &'static str) -> Self {
        AppError::Internal {
            context,
            cause: anyhow::Error::new(err),
        }
    }
}

/// Unreadable request bodies answer with the same `{message}` shape as any
/// other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            AppError::Internal { context, cause } => {
                tracing::error!("{context}: {cause:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": context, "error": format!("{cause:#}") })),
                )
                    .into_response()
            }
        }
    }
}
