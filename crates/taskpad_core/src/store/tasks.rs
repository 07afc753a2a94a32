//! Task store: the live todo collection.
//!
//! # Responsibility
//! - Own the task collection in memory and mirror it to the `todos` record
//!   after every mutation.
//! - Surface each mutation's outcome to callers and notice subscribers.
//!
//! # Invariants
//! - Collection order is insertion order; display ordering is derived by
//!   the query layer and never persisted.
//! - `update`/`toggle_complete`/`delete` on a missing id are silent no-ops.
//! - State is optimistic: in-memory mutation happens first, then the full
//!   collection is written back.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::notify::{NoticeHub, NoticeListener};
use crate::repo::record_store::{RecordStore, TASKS_KEY};
use crate::store::StoreResult;
use log::{debug, info, warn};

/// Holds the todo collection and its persistence lifecycle.
pub struct TaskStore<S: RecordStore> {
    records: S,
    tasks: Vec<Task>,
    notices: NoticeHub,
}

impl<S: RecordStore> TaskStore<S> {
    /// Creates an empty store; call [`restore`] to load persisted tasks.
    ///
    /// [`restore`]: TaskStore::restore
    pub fn new(records: S) -> Self {
        Self {
            records,
            tasks: Vec::new(),
            notices: NoticeHub::new(),
        }
    }

    /// Loads the persisted collection, once, at startup.
    ///
    /// An absent or corrupt record restores as an empty collection.
    pub fn restore(&mut self) -> StoreResult<()> {
        self.tasks = self
            .records
            .load_typed::<Vec<Task>>(TASKS_KEY)?
            .unwrap_or_default();
        info!(
            "event=tasks_restore module=tasks status=ok count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Creates a task from a draft and appends it to the collection.
    ///
    /// Assigns a fresh unique id and the current timestamp. Title emptiness
    /// is the caller's contract (`TaskDraft::validate`); it is not
    /// re-checked here.
    pub fn create(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        let task = Task::new(draft);
        self.tasks.push(task.clone());
        self.persist("task_create", "Failed to create task")?;

        info!("event=task_create module=tasks status=ok id={}", task.id);
        self.notices.success("Task created successfully");
        Ok(task)
    }

    /// Merges `patch` into the task with the given id.
    ///
    /// A missing id is a silent no-op: nothing changes, nothing is emitted,
    /// and the call still succeeds.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_update module=tasks status=skip reason=not_found id={id}");
            return Ok(());
        };

        task.apply(patch);
        self.persist("task_update", "Failed to update task")?;

        info!("event=task_update module=tasks status=ok id={id}");
        self.notices.success("Task updated successfully");
        Ok(())
    }

    /// Permanently removes the task with the given id.
    ///
    /// A missing id is a silent no-op.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=tasks status=skip reason=not_found id={id}");
            return Ok(());
        }

        self.persist("task_delete", "Failed to delete task")?;

        info!("event=task_delete module=tasks status=ok id={id}");
        self.notices.success("Task deleted successfully");
        Ok(())
    }

    /// Flips the task's completion flag via [`update`].
    ///
    /// A missing id is a silent no-op.
    ///
    /// [`update`]: TaskStore::update
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<()> {
        let Some(completed) = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.completed)
        else {
            debug!("event=task_toggle module=tasks status=skip reason=not_found id={id}");
            return Ok(());
        };

        self.update(
            id,
            &TaskPatch {
                completed: Some(!completed),
                ..TaskPatch::default()
            },
        )
    }

    /// Snapshot of the live collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Registers a notice listener for this store's operation outcomes.
    pub fn subscribe(&mut self, listener: NoticeListener) {
        self.notices.subscribe(listener);
    }

    fn persist(&self, event: &str, failure_message: &str) -> StoreResult<()> {
        if let Err(err) = self.records.save_typed(TASKS_KEY, &self.tasks) {
            warn!("event={event} module=tasks status=error error={err}");
            self.notices.error(failure_message);
            return Err(err.into());
        }
        Ok(())
    }
}
