//! HTTP middleware stack for the orders API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost - applied in `main`)
//! 2. CORS (permissive, matching the service's browser-facing use)
//! 3. Request log (correlation id + completion line with latency)
//! 4. API key gate (protected routes only; `/health` is exempt)

pub mod api_key;
pub mod request_log;

pub use api_key::{API_KEY_HEADER, require_api_key};
pub use request_log::{REQUEST_ID_HEADER, request_log_middleware};
