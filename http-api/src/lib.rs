//! HTTP API for the Todo service
//!
//! Axum router, request/response schemas, and centralized error
//! translation. Every failure leaving this crate is a structured JSON body
//! of the form `{"error": <kind>, "detail": <info>}`.
//!
//! # Layers
//!
//! - [`server`] - Router assembly and the serving loop
//! - [`handlers`] - One handler per operation, each a single
//!   request-to-response transition
//! - [`schemas`] - Request/response shapes with field constraints
//! - [`error`] - Error-to-response translation
//! - [`extract`] - Extractors keeping rejection bodies on the error contract
//! - [`request_logger`] - Per-request logging middleware

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request_logger;
pub mod schemas;
pub mod server;

pub use error::{ApiError, FieldViolation};
pub use server::{AppState, HttpServer};
