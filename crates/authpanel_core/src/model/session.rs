//! Session domain model.
//!
//! # Responsibility
//! - Define the persisted record proving a logged-in UI state.
//! - Keep the wire shape stable for both storage backends.
//!
//! # Invariants
//! - `email` is trimmed and non-empty (enforced by the submit flow
//!   before a record is ever constructed).
//! - At most one record exists at a time, in exactly one backend.
//! - `remember` is the source of truth for backend durability.

use serde::{Deserialize, Serialize};

/// Persisted session state shared by the durable and ephemeral backends.
///
/// Serialized as `{ "email": ..., "timestamp": ..., "remember": ... }`;
/// both backends store the same JSON payload under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Account email shown verbatim on the logged-in panel.
    pub email: String,
    /// Creation time in Unix epoch milliseconds.
    pub timestamp: i64,
    /// Selects the durable backend when `true`, ephemeral otherwise.
    pub remember: bool,
}

impl SessionRecord {
    /// Creates a record stamped with the caller-provided creation time.
    ///
    /// The clock stays outside this type so tests can stamp records
    /// deterministically.
    pub fn new(email: impl Into<String>, remember: bool, now_epoch_ms: i64) -> Self {
        Self {
            email: email.into(),
            timestamp: now_epoch_ms,
            remember,
        }
    }
}
