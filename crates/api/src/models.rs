//! Wire model for the order file.

use orders_api_core::{Email, OrderId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A customer purchase record.
///
/// Only `id` and `customerEmail` are meaningful to this service; every other
/// attribute is collected into `extra` and passed through responses
/// unmodified. Ids are assigned externally and treated as stable keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Some records in the wild carry no customer email; they are still
    /// returned by id lookups but never match an email search.
    #[serde(
        rename = "customerEmail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_email: Option<Email>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The on-disk order document: an object with a single `orders` field
/// holding the ordered sequence of records.
///
/// Loaded fresh on every request and discarded when the request completes;
/// the service never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCollection {
    pub orders: Vec<Order>,
}
