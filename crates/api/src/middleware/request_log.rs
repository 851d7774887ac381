//! Request observer: correlation id plus a completion log line.
//!
//! The completion line is emitted after the handler's response is produced,
//! keeping timing/observation out of the handlers themselves. The request id
//! reuses an upstream `x-request-id` (load balancer, proxy) when present,
//! otherwise a UUID v4 is generated. The id is:
//! - Added to the Sentry scope for error correlation
//! - Included in the completion log line
//! - Returned in the response headers

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that stamps a request id and logs one completion line per
/// request with method, path, status, and latency.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    // Set in Sentry scope for error correlation
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        request_id,
        latency_ms,
        "request completed"
    );

    // Add to response headers so clients can reference the request ID
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
