//! Domain model for the session and task stores.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep create/update input shapes next to the records they produce.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `created_at` is immutable after creation; deletion is permanent.

pub mod identity;
pub mod task;
