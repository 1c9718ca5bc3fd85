//! Liveness operation.
//!
//! `HealthEndpoint::check_health` is the whole health contract: it writes one
//! informational record with the text "healthy" to its log sink and returns.
//! It performs no I/O of its own and cannot fail, so the transport layer always
//! answers it with 200 OK.

use std::fmt;
use std::sync::Arc;

/// Message written to the log sink on every health check
pub const HEALTHY_MESSAGE: &str = "healthy";

/// Destination for the informational record emitted by a health check.
///
/// Implementations must be cheap and non-blocking; they are called inline on
/// the request path from any number of tasks at once.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards records to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Answers liveness probes with an unconditional success.
#[derive(Clone)]
pub struct HealthEndpoint {
    sink: Arc<dyn LogSink>,
}

impl HealthEndpoint {
    /// Creates an endpoint that logs to the given sink.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Records one "healthy" line. Stateless and idempotent.
    pub fn check_health(&self) {
        self.sink.info(HEALTHY_MESSAGE);
    }
}

impl Default for HealthEndpoint {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl fmt::Debug for HealthEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthEndpoint").finish_non_exhaustive()
    }
}
