//! Session persistence over a durable/ephemeral backend pair.
//!
//! # Responsibility
//! - Write exactly one session record to the backend selected by the
//!   remember flag, and erase it from the other.
//! - Rehydrate the session at startup, durable backend first.
//!
//! # Invariants
//! - Both backends are addressed by the same fixed key.
//! - `persist` leaves exactly one backend populated.
//! - `read` treats unparseable content as no session.
//! - `clear` empties both backends and always succeeds.

use crate::model::session::SessionRecord;
use crate::store::{KeyValueStore, StoreError, StoreResult};
use log::{info, warn};

/// Fixed key addressing the session record in either backend.
pub const SESSION_STATE_KEY: &str = "authpanel_auth_state";

/// Session store composed of a durable and an ephemeral backend.
pub struct SessionStore<D: KeyValueStore, E: KeyValueStore> {
    durable: D,
    ephemeral: E,
}

impl<D: KeyValueStore, E: KeyValueStore> SessionStore<D, E> {
    pub fn new(durable: D, ephemeral: E) -> Self {
        Self { durable, ephemeral }
    }

    /// Persists a session record stamped with `now_epoch_ms`.
    ///
    /// # Contract
    /// - `remember = true` writes durably and erases the ephemeral copy.
    /// - `remember = false` writes ephemerally and erases the durable copy.
    /// - Post-state: exactly one backend holds the record.
    pub fn persist(&self, email: &str, remember: bool, now_epoch_ms: i64) -> StoreResult<()> {
        let record = SessionRecord::new(email, remember, now_epoch_ms);
        let payload = serde_json::to_string(&record)
            .map_err(|err| StoreError::Codec(err.to_string()))?;

        if remember {
            self.durable.put(SESSION_STATE_KEY, &payload)?;
            self.ephemeral.remove(SESSION_STATE_KEY)?;
        } else {
            self.ephemeral.put(SESSION_STATE_KEY, &payload)?;
            self.durable.remove(SESSION_STATE_KEY)?;
        }

        info!(
            "event=session_persist module=repo status=ok backend={}",
            if remember { "durable" } else { "ephemeral" }
        );
        Ok(())
    }

    /// Reads the persisted session, durable backend first.
    ///
    /// The first raw value found wins; a malformed durable value is not
    /// masked by falling back to the ephemeral backend. Malformed content
    /// reads as `None` and is never surfaced to the caller.
    pub fn read(&self) -> StoreResult<Option<SessionRecord>> {
        let raw = match self.durable.get(SESSION_STATE_KEY)? {
            Some(raw) => Some(raw),
            None => self.ephemeral.get(SESSION_STATE_KEY)?,
        };

        let Some(raw) = raw else {
            info!("event=session_read module=repo status=ok outcome=none");
            return Ok(None);
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => {
                info!("event=session_read module=repo status=ok outcome=found");
                Ok(Some(record))
            }
            Err(err) => {
                warn!(
                    "event=session_read module=repo status=ok outcome=malformed error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Removes any session record from both backends.
    ///
    /// Idempotent: succeeds even when nothing was stored.
    pub fn clear(&self) -> StoreResult<()> {
        self.durable.remove(SESSION_STATE_KEY)?;
        self.ephemeral.remove(SESSION_STATE_KEY)?;
        info!("event=session_clear module=repo status=ok");
        Ok(())
    }

    /// Read-only access to the durable backend, for host inspection.
    pub fn durable(&self) -> &D {
        &self.durable
    }

    /// Read-only access to the ephemeral backend, for host inspection.
    pub fn ephemeral(&self) -> &E {
        &self.ephemeral
    }
}
