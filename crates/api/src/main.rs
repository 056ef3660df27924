//! Status API entry point.

use std::sync::Arc;

use status_api::{Config, Server, ServerError, TracingLogger, telemetry};
use tokio::signal;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // .env is optional; a missing file is only worth a debug line.
    let dotenv_result = dotenv::dotenv();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config);

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    let server = Server::bind(&config, Arc::new(TracingLogger))
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to start server"))?;
    tracing::info!(addr = %server.local_addr(), "starting status API");

    server.run_until(shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
