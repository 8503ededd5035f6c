//! Structured request logging middleware for the HTTP API
//!
//! Emits one tracing event per request with method, path, status, and
//! elapsed milliseconds.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Per-request logging middleware
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}
