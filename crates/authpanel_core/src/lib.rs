//! Core logic for the authentication panel.
//! This crate is the single source of truth for view-state and
//! session-persistence invariants; hosts supply only rendering handles.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::session::SessionRecord;
pub use repo::session_repo::{SessionStore, SESSION_STATE_KEY};
pub use schedule::{
    Clock, ManualClock, PendingView, SystemClock, TaskHandle, TransitionScheduler,
    LOGIN_REDIRECT_DELAY_MS, RECOVERY_REDIRECT_DELAY_MS,
};
pub use service::auth_flow::{AuthFlow, SubmitOutcome, ValidationError, MIN_PASSWORD_LEN};
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use view::{
    ActiveTab, CopyText, CopyVariant, MessageKind, Region, ViewController, ViewHandles, ViewState,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
