//! HTTP route handlers for the orders API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (no authentication)
//!
//! # Orders (x-api-key required)
//! GET  /orders/search?email=   - All orders for a customer email
//! GET  /orders/{id}            - Single order by id
//! ```

pub mod health;
pub mod orders;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::middleware::{request_log_middleware, require_api_key};
use crate::state::AppState;

/// Create the order routes router (API key required).
pub fn order_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/search", get(orders::search))
        .route("/{id}", get(orders::show))
        .route_layer(from_fn_with_state(state.clone(), require_api_key))
}

/// Assemble the full application router.
///
/// `/health` is mounted outside the API key layer; everything under
/// `/orders` sits behind it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/orders", order_routes(&state))
        .layer(from_fn(request_log_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
