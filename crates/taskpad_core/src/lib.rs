//! Core state and persistence layer for taskpad.
//! This crate is the single source of truth for session and task state.

pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod query;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::Identity;
pub use model::task::{Category, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
pub use notify::{Notice, NoticeHub, NoticeKind};
pub use query::filter::{filter_tasks, CategoryFilter, StatusFilter, TaskFilter};
pub use query::report::{due_date_index, recent, summarize, DashboardSummary};
pub use repo::record_store::{
    RecordStore, RepoError, RepoResult, SqliteRecordStore, IDENTITY_KEY, TASKS_KEY, TOKEN_KEY,
};
pub use store::session::{SessionState, SessionStore};
pub use store::tasks::TaskStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
