//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its create/update input shapes.
//! - Keep patch-merge semantics in one place.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` never changes after creation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Two-valued priority tag driving sort order and visual grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Urgent,
    NonUrgent,
}

/// A single to-do entry.
///
/// `due_date` is calendar-day precision on purpose: calendar grouping and
/// equality never have to strip a time-of-day component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID assigned at creation.
    pub id: TaskId,
    /// Non-empty by caller contract; the store does not re-validate.
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Category,
    pub completed: bool,
    /// Assigned at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Create input: every task field except `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Category,
    pub completed: bool,
}

/// Update input: every field optional.
///
/// `description` and `due_date` are doubly optional so `Some(None)` clears
/// the stored value while `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub category: Option<Category>,
    pub completed: Option<bool>,
}

/// Draft validation error for consumer-side input checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Materializes a draft into a task with a fresh id and timestamp.
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            category: draft.category,
            completed: draft.completed,
            created_at: Utc::now(),
        }
    }

    /// Merges a patch into this task.
    ///
    /// # Invariants
    /// - `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

impl TaskDraft {
    /// Checks the invariants callers must uphold before `create`.
    ///
    /// The task store itself does not run this; input validation belongs to
    /// the consumer layer, and this helper keeps that check in one place.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}
