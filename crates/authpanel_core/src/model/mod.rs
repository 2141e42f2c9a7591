//! Domain model for the authentication panel.
//!
//! # Responsibility
//! - Define canonical data structures used by the session flow.
//! - Keep one persisted shape shared by both storage backends.
//!
//! # Invariants
//! - A session is represented by exactly one `SessionRecord` at a time.

pub mod session;
