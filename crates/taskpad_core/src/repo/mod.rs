//! Persistence adapter contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable key-value record storage for the stores.
//! - Keep SQL and JSON encoding details inside the persistence boundary.

pub mod record_store;
