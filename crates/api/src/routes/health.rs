//! Health check route handler.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Liveness health check endpoint.
///
/// Unauthenticated and always succeeds while the process is running; does
/// not touch the order file.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        timestamp: Utc::now(),
    })
}
