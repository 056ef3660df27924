//! Single-route HTTP status service.
//!
//! `GET /` answers `{"message":"ALL GOOD!!!!"}`. Every other request gets an
//! explicit JSON 404 or 405. Diagnostics flow through an injected [`Logger`],
//! HTTP spans through `tower_http`'s trace layer.

pub mod config;
pub mod error;
pub mod logger;
pub mod routes;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, LogFormat};
pub use error::{ApiError, ServerError};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use server::Server;

/// Shared application state accessible from all handlers.
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<dyn Logger>,
}

impl AppState {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

/// Creates the Axum application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(routes::root::get).fallback(routes::fallback::method_not_allowed),
        )
        .fallback(routes::fallback::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
