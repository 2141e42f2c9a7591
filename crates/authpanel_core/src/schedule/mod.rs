//! Clock abstraction and deferred view transitions.
//!
//! # Responsibility
//! - Stamp session records and schedule the post-submit redirects.
//! - Keep time injectable so tests drive a virtual clock instead of
//!   sleeping.
//!
//! # Invariants
//! - Due tasks fire in schedule order when drained at the same instant.
//! - A canceled handle never fires; canceling an unknown or already
//!   drained handle is a no-op.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Delay before a successful login/register lands on the logged-in panel.
pub const LOGIN_REDIRECT_DELAY_MS: i64 = 400;
/// Delay before the recovery acknowledgment returns to the login view.
pub const RECOVERY_REDIRECT_DELAY_MS: i64 = 800;

/// Time source in Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

// Lets a caller keep ownership of a `ManualClock` and hand the flow a
// reference, so tests can advance time from outside.
impl<C: Clock + ?Sized> Clock for &C {
    fn now_epoch_ms(&self) -> i64 {
        (**self).now_epoch_ms()
    }
}

/// Wall-clock time source for production hosts.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Settable time source for tests and scripted walkthroughs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

/// Target of a deferred transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingView {
    Login,
    LoggedIn(String),
}

/// Opaque handle for canceling a scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTransition {
    handle: TaskHandle,
    due_at_ms: i64,
    target: PendingView,
}

/// Queue of deferred view transitions, drained by the host loop.
///
/// Pending entries are deliberately not canceled when the user navigates
/// before they fire: all transitions are idempotent total-state renders,
/// so the last one to land wins.
#[derive(Debug, Default)]
pub struct TransitionScheduler {
    queue: Vec<ScheduledTransition>,
    next_handle: u64,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `target` to fire at `due_at_ms`.
    pub fn schedule(&mut self, due_at_ms: i64, target: PendingView) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.push(ScheduledTransition {
            handle,
            due_at_ms,
            target,
        });
        handle
    }

    /// Drops a pending transition. Unknown handles are ignored.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.queue.retain(|entry| entry.handle != handle);
    }

    /// Removes and returns every transition due at `now_ms`, earliest
    /// first; ties keep schedule order.
    pub fn drain_due(&mut self, now_ms: i64) -> Vec<PendingView> {
        let mut due: Vec<ScheduledTransition> = Vec::new();
        let mut remaining: Vec<ScheduledTransition> = Vec::new();
        for entry in self.queue.drain(..) {
            if entry.due_at_ms <= now_ms {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.queue = remaining;

        // Stable sort preserves schedule order for equal due times.
        due.sort_by_key(|entry| entry.due_at_ms);
        due.into_iter().map(|entry| entry.target).collect()
    }

    /// Number of not-yet-due transitions.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
