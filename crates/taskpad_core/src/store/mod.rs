//! Session and task stores.
//!
//! # Responsibility
//! - Own the live application state and mirror it to durable records.
//! - Surface operation outcomes to callers and notice subscribers.
//!
//! # Invariants
//! - Each mutation updates in-memory state and persists before returning;
//!   callers observe operations in invocation order.
//! - Stores never bypass the record store's corruption-recovery policy.

use crate::repo::record_store::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod session;
pub mod tasks;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level operation error.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence failed underneath an otherwise valid operation.
    Repo(RepoError),
    /// The simulated remote endpoint rejected a login/register attempt.
    RemoteRejected(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::RemoteRejected(reason) => write!(f, "request rejected: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::RemoteRejected(_) => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
