//! Record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Round-trip named JSON records through durable storage.
//! - Recover from corrupt persisted data by treating it as absent.
//!
//! # Invariants
//! - `save` followed by `load` of the same key returns the same value.
//! - A value that cannot be parsed or decoded is reported as absent, never
//!   as a hard error; storage-level failures still surface as errors.

use crate::db::{migrations::latest_version, DbError};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed record key for the persisted identity.
pub const IDENTITY_KEY: &str = "user";
/// Fixed record key for the opaque auth token.
pub const TOKEN_KEY: &str = "token";
/// Fixed record key for the full task collection.
pub const TASKS_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence adapter error for record storage operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode record value: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable key-value storage for JSON records.
pub trait RecordStore {
    /// Loads the record stored under `key`, or `None` when absent or when
    /// the stored text is not valid JSON.
    fn load(&self, key: &str) -> RepoResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous record.
    fn save(&self, key: &str, value: &Value) -> RepoResult<()>;

    /// Removes the record under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> RepoResult<()>;

    /// Loads and decodes a typed record.
    ///
    /// A record that exists but does not decode into `T` is treated the
    /// same as corrupt JSON: reported absent with a warning log.
    fn load_typed<T: DeserializeOwned>(&self, key: &str) -> RepoResult<Option<T>> {
        let Some(value) = self.load(key)? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(err) => {
                warn!("event=record_load module=repo status=corrupt key={key} error={err}");
                Ok(None)
            }
        }
    }

    /// Encodes and stores a typed record.
    fn save_typed<T: Serialize>(&self, key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_value(value)?;
        self.save(key, &encoded)
    }
}

/// SQLite-backed record store over the `records` table.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a bootstrapped connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the connection's schema version does
    ///   not match the latest migration, i.e. it was opened without going
    ///   through `db::open_db`/`db::open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn load(&self, key: &str) -> RepoResult<Option<Value>> {
        let text: Option<String> = self
            .conn
            .query_row("SELECT value FROM records WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;

        let Some(text) = text else {
            return Ok(None);
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("event=record_load module=repo status=corrupt key={key} error={err}");
                Ok(None)
            }
        }
    }

    fn save(&self, key: &str, value: &Value) -> RepoResult<()> {
        let text = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO records (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, text],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM records WHERE key = ?1;", [key])?;
        Ok(())
    }
}
