//! Lookup and filtering over a loaded order collection.
//!
//! Pure functions over in-memory data; callers load the collection first.

use orders_api_core::{Email, OrderId};

use crate::models::Order;

/// Find the order with the given id.
///
/// Exact string match. Ids are unique in well-formed collections; if
/// duplicates exist in storage, the first in collection order wins.
#[must_use]
pub fn find_by_id<'a>(orders: &'a [Order], id: &OrderId) -> Option<&'a Order> {
    orders.iter().find(|order| &order.id == id)
}

/// Collect every order whose customer email matches, case-insensitively.
///
/// Preserves collection order. Records without a customer email never match.
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn find_by_email<'a>(orders: &'a [Order], email: &Email) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| {
            order
                .customer_email
                .as_ref()
                .is_some_and(|candidate| candidate.eq_ignore_case(email))
        })
        .collect()
}
