//! Integration tests for the orders API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with a known key and the sample order file
//! ORDERS_API_KEY=<key> cargo run -p orders-api
//!
//! # Run the ignored tests against it
//! ORDERS_API_KEY=<key> cargo test -p orders-api-integration-tests -- --ignored
//! ```
//!
//! Tests default to `http://localhost:3000`; override with
//! `ORDERS_BASE_URL`. They assume the repository's sample `db.json` is the
//! configured order file.
