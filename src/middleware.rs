//! Request ID middleware for correlating logs with requests.
//!
//! Reuses the caller's `x-request-id` header when present, otherwise generates
//! a UUID v4. The id names a tracing span wrapping the whole request, so the
//! "healthy" record and the completion line share the same `request_id` field.
//! The id is echoed back on the response.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Picks the inbound id if it is a usable header value, otherwise a fresh UUID.
fn resolve_request_id(request: &Request) -> HeaderValue {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty() && value.to_str().is_ok())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

/// Middleware that assigns a request ID and creates a request span.
///
/// This should be the outermost layer so the span covers every other layer.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let header_value = resolve_request_id(&request);
    let request_id = header_value.to_str().unwrap_or_default().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));
    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_resolve_request_id_reuses_inbound_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "probe-42")
            .body(Body::empty())
            .unwrap();
        assert_eq!(resolve_request_id(&request), "probe-42");
    }

    #[test]
    fn test_resolve_request_id_generates_uuid() {
        let request = Request::builder().body(Body::empty()).unwrap();
        let value = resolve_request_id(&request);
        assert!(Uuid::parse_str(value.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_resolve_request_id_ignores_empty_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "")
            .body(Body::empty())
            .unwrap();
        let value = resolve_request_id(&request);
        assert!(Uuid::parse_str(value.to_str().unwrap()).is_ok());
    }
}
