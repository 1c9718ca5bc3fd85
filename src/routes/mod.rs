//! HTTP route handlers.
//!
//! Only the health probe is routed. Unknown paths fall through to axum's 404
//! and unsupported methods on the probe route to its 405, neither of which
//! touches the health endpoint.

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health route and request tracing.
pub fn create_router(state: AppState) -> Router {
    // Health check - never cached, always fresh for liveness probes.
    // GET also answers HEAD.
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
