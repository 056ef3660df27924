//! Listener lifecycle: a [`Server`] only exists once its socket is bound.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::ServerError;
use crate::logger::Logger;
use crate::{AppState, create_app};

/// A bound, not yet serving, HTTP server.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
}

impl Server {
    /// Binds the listener on `config.addr()` and announces the port through `logger`.
    pub async fn bind(config: &Config, logger: Arc<dyn Logger>) -> Result<Self, ServerError> {
        let addr = config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        logger.log(&format!("server listening on port {}", local_addr.port()));

        let app = create_app(AppState::new(logger));
        Ok(Self {
            listener,
            local_addr,
            app,
        })
    }

    /// Address the listener actually bound to (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until the process is terminated.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    pub async fn run_until<F>(self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(ServerError::Serve)
    }
}
