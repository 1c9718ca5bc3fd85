//! Liveness: a minimal liveness probe service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing in the configured format, and serves the health
//! route until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liveness::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};

/// Liveness: answers liveness probes with 200 OK
#[derive(Parser, Debug)]
#[command(name = "liveness", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "liveness=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration decides the log format, so it is loaded before tracing exists
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    liveness::run(config).await?;

    Ok(())
}
