//! Serves the router on an ephemeral port and probes it over TCP.

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use liveness::{create_router, AppState, HealthEndpoint};

#[tokio::test]
async fn test_live_server_answers_probe() {
    let app = create_router(AppState::new(HealthEndpoint::default()));
    let handle = Handle::new();
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();

    let server = tokio::spawn(liveness::http::serve(app, addr, handle.clone()));
    let bound = handle.listening().await.expect("server should bind");

    let response = reqwest::get(format!("http://{}/health", bound))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.bytes().await.unwrap().is_empty());

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let taken = listener.local_addr().unwrap();

    let app = create_router(AppState::new(HealthEndpoint::default()));
    let result = liveness::http::serve(app, taken, Handle::new()).await;

    assert!(matches!(result, Err(liveness::http::ServerError::Io(_))));
}
