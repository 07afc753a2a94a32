//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use taskpad_core::db::open_db_in_memory;
use taskpad_core::{Category, SqliteRecordStore, TaskDraft, TaskStore};

fn main() -> Result<(), Box<dyn Error>> {
    println!("taskpad_core version={}", taskpad_core::core_version());

    // In-memory probe: bootstrap storage, run one mutation, read it back.
    let conn = open_db_in_memory()?;
    let mut store = TaskStore::new(SqliteRecordStore::try_new(&conn)?);
    store.restore()?;
    store.create(TaskDraft {
        title: "smoke task".to_string(),
        description: None,
        due_date: None,
        category: Category::NonUrgent,
        completed: false,
    })?;

    println!("taskpad_core tasks={}", store.tasks().len());
    Ok(())
}
