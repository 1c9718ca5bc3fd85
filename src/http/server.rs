//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server with signal-driven graceful shutdown.
///
/// This function blocks until the server shuts down.
pub async fn start_server(
    app: Router,
    addr: SocketAddr,
    shutdown_timeout: Duration,
) -> Result<(), ServerError> {
    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), shutdown_timeout);
    serve(app, addr, handle).await
}

/// Bind `addr` and serve `app` until `handle` is shut down.
///
/// The caller owns the handle, so it can learn the bound address through
/// `Handle::listening` (useful with port 0) and stop the server.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
