//! Health check endpoint for container orchestration.
//!
//! Used by Kubernetes, ECS, systemd and load balancers to verify the process
//! is alive. The handler only adapts `HealthEndpoint::check_health` to HTTP.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Health check handler.
///
/// Runs the health check and answers 200 OK with an empty body.
pub async fn health(State(state): State<AppState>) -> StatusCode {
    state.health.check_health();
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthEndpoint;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_health_returns_200_with_empty_body() {
        let state = AppState::new(HealthEndpoint::default());
        let response = health(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_health_always_succeeds() {
        let state = AppState::new(HealthEndpoint::default());
        for _ in 0..10 {
            assert_eq!(health(State(state.clone())).await, StatusCode::OK);
        }
    }
}
