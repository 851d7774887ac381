//! Orders API Core - Shared types library.
//!
//! This crate provides common types used across the orders API components:
//! - `api` - The HTTP service binary
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for order ids, customer emails, and the
//!   shared API key credential

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
