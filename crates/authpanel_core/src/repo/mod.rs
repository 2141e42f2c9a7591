//! Repository layer for persisted session state.
//!
//! # Responsibility
//! - Orchestrate the durable/ephemeral backend pair behind use-case APIs.
//! - Keep serialization details out of the submit flow.
//!
//! # Invariants
//! - After any write, at most one backend holds a session record.
//! - Malformed persisted content reads as "no session", never an error.

pub mod session_repo;
