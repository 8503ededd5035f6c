//! HTTP server assembly
//!
//! Wires the item routes, the root and health endpoints, the request
//! logging middleware, and the shared repository handle into one axum
//! router.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use todo_core::repository::ItemRepository;
use tracing::info;

use crate::{handlers, request_logger};

/// Shared server state for handlers
///
/// The repository handle is passed explicitly through router state; there
/// is no process-global store.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ItemRepository>,
}

/// HTTP server for the Todo API
pub struct HttpServer {
    state: AppState,
}

impl HttpServer {
    /// Create a new server over the given repository
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            state: AppState { repository },
        }
    }

    /// Bind the listen address and serve until the process stops
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting HTTP server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build the router with all endpoints
    ///
    /// Collection routes are registered with and without the trailing
    /// slash; both paths are part of the public surface.
    pub fn into_router(self) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route(
                "/items",
                get(handlers::list_items).post(handlers::create_item),
            )
            .route(
                "/items/",
                get(handlers::list_items).post(handlers::create_item),
            )
            .route(
                "/items/:id",
                get(handlers::get_item)
                    .put(handlers::update_item)
                    .delete(handlers::delete_item),
            )
            .layer(middleware::from_fn(
                request_logger::request_logging_middleware,
            ))
            .with_state(self.state)
    }
}
