//! Error translation for the HTTP edge
//!
//! Maps internal item errors and request failures onto the structured
//! `{"error": <kind>, "detail": <info>}` response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use todo_core::ItemError;

/// A single field-level validation failure, surfaced in 422 bodies
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Human-readable constraint description
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// HTTP-edge errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Explicit HTTP-level failure, echoed verbatim to the client
    #[error("{1}")]
    Http(StatusCode, String),

    /// Request body or parameters failed schema constraints
    #[error("request validation failed")]
    Validation(Vec<FieldViolation>),

    /// Anything unanticipated; detail is logged, never echoed
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// A 404 with the given detail message
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::Http(StatusCode::NOT_FOUND, detail.into())
    }

    /// The status code this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Http(status, _) => *status,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Http(_, detail) => {
                tracing::warn!(status = status.as_u16(), detail = %detail, "HTTP exception");
                json!({"error": "HTTPException", "detail": detail})
            }
            ApiError::Validation(violations) => {
                tracing::info!(?violations, "Validation error");
                json!({"error": "ValidationError", "detail": violations})
            }
            ApiError::Internal(detail) => {
                // Full detail stays server-side; the client gets a safe message
                tracing::error!(detail = %detail, "Unhandled error");
                json!({
                    "error": "InternalServerError",
                    "detail": "An unexpected error occurred. Please try again later."
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => ApiError::not_found("Item not found"),
            ItemError::Validation { field, message } => {
                ApiError::Validation(vec![FieldViolation::new(field, message)])
            }
            ItemError::Database(msg) => ApiError::Internal(msg),
            ItemError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation(vec![]).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_item_error_mapping() {
        let api: ApiError = ItemError::not_found_id(uuid::Uuid::nil()).into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);

        let api: ApiError = ItemError::empty_field("title").into();
        match api {
            ApiError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "title");
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let api: ApiError = ItemError::Database("pool gone".to_string()).into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_responses_render() {
        // IntoResponse must not panic for any variant
        let _ = ApiError::not_found("Item not found").into_response();
        let _ = ApiError::Validation(vec![FieldViolation::new("title", "required")])
            .into_response();
        let _ = ApiError::Internal("boom".to_string()).into_response();
    }
}
