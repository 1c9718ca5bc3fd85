use crate::config::ConfigError;
use crate::http::ServerError;

/// Startup and serving failures. The health check itself has no error path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
