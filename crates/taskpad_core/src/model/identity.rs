//! Authenticated identity model.
//!
//! # Invariants
//! - At most one identity is active at a time.
//! - An identity is set only by successful login/register and cleared only
//!   by logout; it is never mutated in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable opaque identifier assigned when the session is established.
    pub id: String,
    pub username: String,
    pub email: String,
}

impl Identity {
    /// Creates an identity with a freshly generated id.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
        }
    }
}
