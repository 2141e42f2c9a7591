//! Use-case services for the authentication panel.
//!
//! # Responsibility
//! - Orchestrate validation, persistence and view transitions into the
//!   submit/logout/bootstrap entry points hosts call.
//! - Keep the view and storage layers decoupled from each other.

pub mod auth_flow;
