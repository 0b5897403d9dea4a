use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use creatorhub_core::error::CoreError;
use creatorhub_db::seed::SeedError;
use creatorhub_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `creatorhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The document store was never configured (missing `DATABASE_URL` or
    /// `DATABASE_NAME`). Every data endpoint reports this the same way.
    #[error("Database not configured")]
    DatabaseNotConfigured,

    /// A store operation failed after a working configuration.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Core(e) => AppError::Core(e),
            SeedError::Store(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::DatabaseNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_NOT_CONFIGURED",
                "Database not configured".to_string(),
            ),

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
