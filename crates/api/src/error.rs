use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every store failure collapses into [`AppError::Database`] and is surfaced
/// with its raw message. Implements [`IntoResponse`] to produce a consistent
/// `{ "error": ... }` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be decoded as JSON.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
