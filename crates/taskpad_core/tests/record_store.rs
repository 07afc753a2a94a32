use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::json;
use taskpad_core::db::open_db_in_memory;
use taskpad_core::{
    Category, RecordStore, RepoError, SqliteRecordStore, Task, TaskDraft, TASKS_KEY,
};

#[test]
fn save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    let value = json!({ "name": "ada", "count": 3 });
    store.save("profile", &value).unwrap();

    assert_eq!(store.load("profile").unwrap(), Some(value));
    assert_eq!(store.load("absent").unwrap(), None);
}

#[test]
fn save_replaces_previous_record() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    store.save("counter", &json!(1)).unwrap();
    store.save("counter", &json!(2)).unwrap();

    assert_eq!(store.load("counter").unwrap(), Some(json!(2)));
}

#[test]
fn remove_deletes_record_and_ignores_absent_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    store.save("temp", &json!("value")).unwrap();
    store.remove("temp").unwrap();
    assert_eq!(store.load("temp").unwrap(), None);

    store.remove("never-existed").unwrap();
}

#[test]
fn corrupt_stored_text_reads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO records (key, value) VALUES ('broken', 'not json {{');",
        [],
    )
    .unwrap();

    let store = SqliteRecordStore::try_new(&conn).unwrap();
    assert_eq!(store.load("broken").unwrap(), None);
}

#[test]
fn typed_decode_mismatch_reads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    // Valid JSON, wrong shape for a task collection.
    store.save(TASKS_KEY, &json!(42)).unwrap();

    let decoded: Option<Vec<Task>> = store.load_typed(TASKS_KEY).unwrap();
    assert_eq!(decoded, None);
}

#[test]
fn typed_roundtrip_reconstructs_date_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    let task = Task::new(TaskDraft {
        title: "file taxes".to_string(),
        description: Some("federal and state".to_string()),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 15),
        category: Category::Urgent,
        completed: false,
    });
    store.save_typed("one-task", &task).unwrap();

    let loaded: Task = store.load_typed("one-task").unwrap().unwrap();
    assert_eq!(loaded, task);
    assert_eq!(loaded.due_date, NaiveDate::from_ymd_opt(2025, 4, 15));
    assert_eq!(loaded.created_at, task.created_at);
}

#[test]
fn absent_date_fields_decode_to_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    let task = Task::new(TaskDraft {
        title: "no deadline".to_string(),
        description: None,
        due_date: None,
        category: Category::NonUrgent,
        completed: false,
    });
    store.save_typed("undated", &task).unwrap();

    let loaded: Task = store.load_typed("undated").unwrap().unwrap();
    assert_eq!(loaded.due_date, None);
    assert_eq!(loaded.description, None);
}

#[test]
fn rejects_connection_opened_without_bootstrap() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteRecordStore::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            actual_version: 0, ..
        }) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected UninitializedConnection"),
    }
}
