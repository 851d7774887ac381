//! Order identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum OrderIdError {
    /// The input string is empty.
    #[error("order id cannot be empty")]
    Empty,
}

/// An order identifier.
///
/// Order ids are assigned by an external system and treated as opaque,
/// immutable string keys: no structure beyond non-emptiness is assumed,
/// and comparison is exact (case-sensitive).
///
/// ## Examples
///
/// ```
/// use orders_api_core::OrderId;
///
/// assert!(OrderId::parse("1001").is_ok());
/// assert!(OrderId::parse("ord_8f2c").is_ok());
/// assert!(OrderId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Parse an `OrderId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn parse(s: &str) -> Result<Self, OrderIdError> {
        if s.is_empty() {
            return Err(OrderIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = OrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(OrderId::parse("1001").is_ok());
        assert!(OrderId::parse("ORD-2024-0001").is_ok());
        assert!(OrderId::parse("a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(OrderId::parse(""), Err(OrderIdError::Empty)));
    }

    #[test]
    fn test_exact_comparison() {
        let id = OrderId::parse("Abc").unwrap();
        assert_eq!(id, OrderId::parse("Abc").unwrap());
        assert_ne!(id, OrderId::parse("abc").unwrap());
    }

    #[test]
    fn test_display() {
        let id = OrderId::parse("1001").unwrap();
        assert_eq!(format!("{id}"), "1001");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = OrderId::parse("1001").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1001\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str() {
        let id: OrderId = "1001".parse().unwrap();
        assert_eq!(id.as_str(), "1001");
    }
}
