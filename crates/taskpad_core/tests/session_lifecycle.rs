use std::cell::RefCell;
use std::rc::Rc;
use taskpad_core::db::open_db_in_memory;
use taskpad_core::{
    NoticeKind, RecordStore, SessionState, SessionStore, SqliteRecordStore, StoreError, TOKEN_KEY,
};

#[test]
fn starts_unknown_and_restores_to_unauthenticated_when_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());

    assert_eq!(*session.state(), SessionState::Unknown);
    session.restore().unwrap();
    assert_eq!(*session.state(), SessionState::Unauthenticated);
    assert!(!session.is_authenticated());
}

#[test]
fn login_derives_username_from_email_local_part() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    session.restore().unwrap();

    let identity = session.login("ada@example.com", "hunter2").unwrap();
    assert_eq!(identity.username, "ada");
    assert_eq!(identity.email, "ada@example.com");
    assert!(session.is_authenticated());
    assert_eq!(session.identity().unwrap().id, identity.id);
}

#[test]
fn register_uses_supplied_username() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    session.restore().unwrap();

    let identity = session
        .register("Grace", "grace@navy.mil", "password")
        .unwrap();
    assert_eq!(identity.username, "Grace");
    assert!(session.is_authenticated());
}

#[test]
fn session_survives_restart() {
    let conn = open_db_in_memory().unwrap();

    let identity = {
        let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
        session.restore().unwrap();
        session.login("kay@example.com", "pw").unwrap()
    };

    let mut restarted = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    restarted.restore().unwrap();
    assert_eq!(
        *restarted.state(),
        SessionState::Authenticated(identity.clone())
    );
}

#[test]
fn logout_then_restore_never_reauthenticates() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    session.restore().unwrap();
    session.login("kay@example.com", "pw").unwrap();

    session.logout();
    assert_eq!(*session.state(), SessionState::Unauthenticated);

    let mut restarted = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    restarted.restore().unwrap();
    assert_eq!(*restarted.state(), SessionState::Unauthenticated);
}

#[test]
fn restore_requires_both_identity_and_token_records() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
        session.restore().unwrap();
        session.login("kay@example.com", "pw").unwrap();
    }

    // Drop only the token half of the pair.
    let records = SqliteRecordStore::try_new(&conn).unwrap();
    records.remove(TOKEN_KEY).unwrap();

    let mut restarted = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    restarted.restore().unwrap();
    assert_eq!(*restarted.state(), SessionState::Unauthenticated);
}

#[test]
fn login_failure_surfaces_error_and_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    session.restore().unwrap();

    let err = session.login("@nobody", "pw").unwrap_err();
    assert!(matches!(err, StoreError::RemoteRejected(_)));
    assert_eq!(*session.state(), SessionState::Unauthenticated);

    let err = session.register("  ", "grace@navy.mil", "pw").unwrap_err();
    assert!(matches!(err, StoreError::RemoteRejected(_)));
    assert!(!session.is_authenticated());
}

#[test]
fn operations_emit_notices_to_subscribers() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionStore::new(SqliteRecordStore::try_new(&conn).unwrap());
    session.restore().unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(Box::new(move |notice| {
        sink.borrow_mut().push((notice.kind, notice.message.clone()));
    }));

    session.login("ada@example.com", "pw").unwrap();
    let _ = session.login("@nobody", "pw");
    session.logout();

    let seen = seen.borrow();
    assert_eq!(
        *seen,
        vec![
            (NoticeKind::Success, "Logged in successfully".to_string()),
            (NoticeKind::Error, "Login failed".to_string()),
            (NoticeKind::Success, "Logged out successfully".to_string()),
        ]
    );
}
