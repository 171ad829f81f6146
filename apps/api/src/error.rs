//! API error types.
//!
//! The last hop of the error chain: everything a handler can fail with
//! is folded into [`ApiError`] and serialized as `{"error": "..."}`
//! with the matching status code.
//!
//! ## Status Mapping
//! ```text
//! NotFound        → 404
//! Validation      → 400
//! InvalidPeriod   → 400  (fixed body: {"error": "Invalid period"})
//! Unauthorized    → 401
//! Internal        → 500  (detail logged, not leaked to the client)
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use stockpile_core::CoreError;
use stockpile_db::DbError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request was well-formed JSON but violates a business rule or
    /// constraint.
    #[error("{0}")]
    Validation(String),

    /// Unrecognized report period. The response body is fixed.
    #[error("Invalid period")]
    InvalidPeriod,

    /// Missing, malformed, or rejected credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Anything the client can do nothing about.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidPeriod => (StatusCode::BAD_REQUEST, "Invalid period".to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. } => {
                ApiError::Validation(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidPeriod(_) => ApiError::InvalidPeriod,
            CoreError::ItemNotFound(_) | CoreError::SupplierNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl From<stockpile_core::ValidationError> for ApiError {
    fn from(err: stockpile_core::ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_mapping() {
        let err: ApiError = DbError::not_found("InventoryItem", "abc").into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = DbError::duplicate("sku", "A1").into();
        assert!(matches!(err, ApiError::Validation(_)));

        let err: ApiError = DbError::Internal("boom".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_invalid_period_has_fixed_message() {
        let err: ApiError = CoreError::InvalidPeriod("yearly".to_string()).into();
        assert_eq!(err.to_string(), "Invalid period");
    }
}
