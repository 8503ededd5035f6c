//! Extractors that keep rejection bodies on the structured error contract
//!
//! Axum's stock extractors answer malformed input with plain-text bodies.
//! These wrappers rewrite every rejection into the same
//! `{"error": "ValidationError", "detail": [...]}` shape the schema checks
//! produce, so the error contract holds on every edge.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};

use crate::error::{ApiError, FieldViolation};

/// `axum::Json` with rejections translated to validation errors
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::Validation(vec![FieldViolation::new(
                "body",
                rejection.body_text(),
            )])),
        }
    }
}

/// `axum::extract::Path` with rejections translated to validation errors
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(ApiError::Validation(vec![FieldViolation::new(
                "path",
                rejection.body_text(),
            )])),
        }
    }
}

/// `axum::extract::Query` with rejections translated to validation errors
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(ApiError::Validation(vec![FieldViolation::new(
                "query",
                rejection.body_text(),
            )])),
        }
    }
}
