//! Key-value storage abstractions and backend implementations.
//!
//! # Responsibility
//! - Define the storage contract shared by the durable and ephemeral
//!   backends.
//! - Isolate SQLite details from the session repository.
//!
//! # Invariants
//! - `remove` of an absent key succeeds (teardown is idempotent).
//! - `put` overwrites any previous value for the key.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage error.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Codec(String),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Codec(message) => write!(f, "session payload codec failure: {message}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Codec(_) => None,
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Storage contract for both session backends.
///
/// Implementations take `&self` so an in-memory backend can sit behind
/// the same seam as a SQLite connection.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes the value stored under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
