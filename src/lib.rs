//! Liveness: a minimal liveness probe service.
//!
//! Answers `GET /health` with 200 OK and an empty body, writing one "healthy"
//! log record per probe.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use health::{HealthEndpoint, LogSink, TracingSink};
pub use routes::create_router;
pub use state::AppState;

/// Wire the health endpoint into the router and serve it until shutdown.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.http.socket_addr()?;

    let state = AppState::new(HealthEndpoint::default());
    let app = create_router(state);

    crate::http::start_server(app, addr, config.http.shutdown_timeout()).await?;
    Ok(())
}
