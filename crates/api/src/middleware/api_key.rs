//! API key gate for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// The HTTP header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware that rejects requests without a valid API key.
///
/// Layered onto the protected routes only; `/health` is mounted outside it.
/// On rejection the handler chain never runs, so an unauthenticated request
/// never reads the order file. The response does not say which part of the
/// credential was wrong.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the header is absent or does not
/// exactly match the configured key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if !state.config().api_key.matches(supplied) {
        return Err(ApiError::Unauthorized(
            "invalid or missing API key".to_owned(),
        ));
    }

    Ok(next.run(request).await)
}
