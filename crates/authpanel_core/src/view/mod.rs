//! View layer: state machine, rendering contract, contextual copy.
//!
//! # Responsibility
//! - Own the single active view state and its transition operations.
//! - Keep rendering behind an injected handles contract so the
//!   controller is testable without a live rendering surface.
//!
//! # Invariants
//! - Exactly one of the four regions is visible after any transition.
//! - Every transition assigns the complete state of all four regions
//!   and hides the message region as its final step.

mod controller;
mod handles;

pub use controller::{ViewController, ViewState};
pub use handles::{ActiveTab, CopyText, CopyVariant, MessageKind, Region, ViewHandles};
