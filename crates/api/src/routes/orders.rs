//! Order lookup route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orders_api_core::{Email, OrderId};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::Order;
use crate::query;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub email: String,
}

/// Search results payload.
#[derive(Debug, Serialize)]
struct SearchResults<'a> {
    orders: Vec<&'a Order>,
}

/// Empty-search payload: a descriptive message, not an error body.
#[derive(Debug, Serialize)]
struct NoMatches {
    message: String,
}

/// `GET /orders/search?email=` - all orders for a customer email.
///
/// The email is required and matched case-insensitively; matches come back
/// in collection order. The parameter is validated before the order file is
/// read, so an invalid request never costs a load.
///
/// # Errors
///
/// `BadRequest` when the email parameter is absent or empty; `Storage` when
/// the order file cannot be loaded.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Response> {
    let email = Email::parse(&params.email).map_err(|_| {
        ApiError::BadRequest("missing required query parameter: email".to_owned())
    })?;

    let collection = state.store().load().await?;
    let matches = query::find_by_email(&collection.orders, &email);

    if matches.is_empty() {
        let body = NoMatches {
            message: format!("no orders found for email {}", email.normalized()),
        };
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    Ok(Json(SearchResults { orders: matches }).into_response())
}

/// `GET /orders/{id}` - a single order by id.
///
/// # Errors
///
/// `NotFound` when no record carries the id; `Storage` when the order file
/// cannot be loaded.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let id = OrderId::parse(&id)
        .map_err(|_| ApiError::BadRequest("missing required path parameter: id".to_owned()))?;

    let collection = state.store().load().await?;

    query::find_by_id(&collection.orders, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no order with id {id}")))
}
