use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use breedbook_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `breedbook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level validation failures on a request body.
    #[error("Invalid input data: {0}")]
    Validation(#[from] ValidationErrors),

    /// A malformed request (unparseable JSON, bad path segment).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::DuplicateName { .. } => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_NAME", core.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Request shape errors ---
            AppError::Validation(errors) => {
                let body = json!({
                    "error": "Invalid input data",
                    "code": "VALIDATION_ERROR",
                    "errors": errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - A unique violation on `uq_breeds_name` maps to 400 `DUPLICATE_NAME`;
///   this is what a concurrent write that slipped past the name pre-check
///   ends up as.
/// - Foreign-key violations map to 404: the referenced breed is gone.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::Database(db_err) = err {
        match (db_err.code().as_deref(), db_err.constraint()) {
            // PostgreSQL unique_violation
            (Some("23505"), Some("uq_breeds_name")) => {
                return (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_NAME",
                    "A breed with this name already exists".to_string(),
                );
            }
            // PostgreSQL foreign_key_violation
            (Some("23503"), _) => {
                return (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Referenced breed not found".to_string(),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
