pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for all error responses, providing consistent information to
/// clients:
/// - `error`: machine-readable error identifier (e.g., "NotFound")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g., validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Missing required fields",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Integrates with common error types from dependencies and renders every
/// failure as a structured [`ErrorResponse`] with the status class the
/// error belongs to: 400 for client-input problems, 404 for missing
/// resources, 500/503 for server-side failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                // Malformed bodies are a client problem regardless of which
                // rejection axum raised (syntax vs. data mismatch).
                (
                    StatusCode::BAD_REQUEST,
                    "BadRequest",
                    e.body_text(),
                    None,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "BadRequest",
                    "Request validation failed".to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::json!(null))),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg, None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg, None),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    msg,
                    None,
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable", msg, None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Task 1 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("Missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::InternalServerError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err = AppError::Database(DbErr::Custom("statement failed".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let body = ErrorResponse {
            error: "NotFound".to_string(),
            message: "gone".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
