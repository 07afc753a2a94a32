//! Derived read-only views over the task collection.
//!
//! # Responsibility
//! - Compute display filtering/ordering, calendar grouping and dashboard
//!   summaries as pure functions of the live collection.
//!
//! # Invariants
//! - Nothing in this module mutates or persists state; every view is
//!   recomputed per query.

pub mod filter;
pub mod report;
