//! Core types for the orders API.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod api_key;
pub mod email;
pub mod id;

pub use api_key::{ApiKey, ApiKeyError};
pub use email::{Email, EmailError};
pub use id::{OrderId, OrderIdError};
