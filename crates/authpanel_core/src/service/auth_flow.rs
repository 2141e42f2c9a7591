//! Form validation and submission flow.
//!
//! # Responsibility
//! - Validate submitted form input and surface failures through the
//!   message region.
//! - On success, persist the session and schedule the redirect.
//!
//! # Invariants
//! - A validation failure mutates nothing beyond the message region:
//!   nothing is persisted and the view state does not change.
//! - The remember flag is read at submit time, for login and register
//!   alike.
//! - Pending redirects are not canceled by later navigation; transitions
//!   are idempotent total-state renders, so the last one to land wins.

use crate::repo::session_repo::SessionStore;
use crate::schedule::{
    Clock, PendingView, TransitionScheduler, LOGIN_REDIRECT_DELAY_MS, RECOVERY_REDIRECT_DELAY_MS,
};
use crate::store::{KeyValueStore, StoreResult};
use crate::view::{MessageKind, ViewController, ViewHandles, ViewState};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

const LOGIN_SUCCESS_MESSAGE: &str = "Signed in, redirecting to your space.";
const REGISTER_SUCCESS_MESSAGE: &str = "Account created, you are now signed in.";
const RECOVERY_SENT_MESSAGE: &str = "Reset link sent, check your inbox.";
const LOGOUT_MESSAGE: &str = "Signed out. Check remember me next time to stay signed in.";

/// Rejected form input. Non-fatal: surfaced through the message region
/// and the form stays on screen for correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    IncompleteLoginFields,
    PasswordTooShort,
    IncompleteRegisterFields,
    PasswordMismatch,
    EmptyRecoveryEmail,
}

impl ValidationError {
    /// User-facing message shown in the message region.
    pub fn message(self) -> &'static str {
        match self {
            Self::IncompleteLoginFields => "Please complete the login fields.",
            Self::PasswordTooShort => "Password must be at least 6 characters.",
            Self::IncompleteRegisterFields => "Please complete all registration fields.",
            Self::PasswordMismatch => "Passwords do not match.",
            Self::EmptyRecoveryEmail => "Enter the email to reset.",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::IncompleteLoginFields => "incomplete_login_fields",
            Self::PasswordTooShort => "password_too_short",
            Self::IncompleteRegisterFields => "incomplete_register_fields",
            Self::PasswordMismatch => "password_mismatch",
            Self::EmptyRecoveryEmail => "empty_recovery_email",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Result of one submit call. Validation rejection is an expected
/// outcome, not an error: only storage transport failures escape as
/// `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(ValidationError),
}

/// Composition root of the panel: session store, view controller,
/// redirect scheduler and clock.
pub struct AuthFlow<D, E, H, C>
where
    D: KeyValueStore,
    E: KeyValueStore,
    H: ViewHandles,
    C: Clock,
{
    session: SessionStore<D, E>,
    view: ViewController<H>,
    scheduler: TransitionScheduler,
    clock: C,
}

impl<D, E, H, C> AuthFlow<D, E, H, C>
where
    D: KeyValueStore,
    E: KeyValueStore,
    H: ViewHandles,
    C: Clock,
{
    pub fn new(session: SessionStore<D, E>, view: ViewController<H>, clock: C) -> Self {
        Self {
            session,
            view,
            scheduler: TransitionScheduler::new(),
            clock,
        }
    }

    /// Seeds the initial view from persisted state.
    ///
    /// A stored session (durable or ephemeral) lands directly on the
    /// logged-in panel with the remember checkbox synced to the stored
    /// flag; anything else, including malformed content, lands on login.
    pub fn bootstrap(&mut self) -> StoreResult<()> {
        match self.session.read()? {
            Some(record) => {
                self.view.set_remember_checked(record.remember);
                self.view.show_logged_in(&record.email);
            }
            None => self.view.show_login(),
        }
        Ok(())
    }

    /// Handles the login form submit.
    pub fn submit_login(
        &mut self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> StoreResult<SubmitOutcome> {
        let email = email.trim();
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return Ok(self.reject(ValidationError::IncompleteLoginFields));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(self.reject(ValidationError::PasswordTooShort));
        }

        self.session
            .persist(email, remember, self.clock.now_epoch_ms())?;
        self.view.show_message(LOGIN_SUCCESS_MESSAGE, MessageKind::Info);
        self.schedule_redirect(LOGIN_REDIRECT_DELAY_MS, PendingView::LoggedIn(email.to_string()));
        info!("event=submit_login module=service status=ok remember={remember}");
        Ok(SubmitOutcome::Accepted)
    }

    /// Handles the register form submit.
    ///
    /// Registration signs the user in immediately; the remember flag is
    /// read from the same checkbox as login.
    pub fn submit_register(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
        remember: bool,
    ) -> StoreResult<SubmitOutcome> {
        let email = email.trim();
        let password = password.trim();
        let confirm_password = confirm_password.trim();

        if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Ok(self.reject(ValidationError::IncompleteRegisterFields));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(self.reject(ValidationError::PasswordTooShort));
        }
        if password != confirm_password {
            return Ok(self.reject(ValidationError::PasswordMismatch));
        }

        self.session
            .persist(email, remember, self.clock.now_epoch_ms())?;
        self.view
            .show_message(REGISTER_SUCCESS_MESSAGE, MessageKind::Info);
        self.schedule_redirect(LOGIN_REDIRECT_DELAY_MS, PendingView::LoggedIn(email.to_string()));
        info!("event=submit_register module=service status=ok remember={remember}");
        Ok(SubmitOutcome::Accepted)
    }

    /// Handles the recovery form submit.
    ///
    /// No email is sent; the acknowledgment is simulated and the view
    /// returns to login after the longer redirect delay.
    pub fn submit_recovery(&mut self, email: &str) -> SubmitOutcome {
        let email = email.trim();
        if email.is_empty() {
            return self.reject(ValidationError::EmptyRecoveryEmail);
        }

        self.view.show_message(RECOVERY_SENT_MESSAGE, MessageKind::Info);
        self.schedule_redirect(RECOVERY_REDIRECT_DELAY_MS, PendingView::Login);
        info!("event=submit_recovery module=service status=ok");
        SubmitOutcome::Accepted
    }

    /// Unconditional logout: clears both backends and returns to login
    /// synchronously.
    ///
    /// The farewell message is shown before the transition, whose final
    /// hide-message step erases it again.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.session.clear()?;
        self.view.show_message(LOGOUT_MESSAGE, MessageKind::Info);
        self.view.show_login();
        info!("event=logout module=service status=ok");
        Ok(())
    }

    /// Tab click: switch to the login form.
    pub fn select_login_tab(&mut self) {
        self.view.show_login();
    }

    /// Tab click: switch to the register form.
    pub fn select_register_tab(&mut self) {
        self.view.show_register();
    }

    /// Forgot-password link: open the recovery form.
    pub fn open_recovery(&mut self) {
        self.view.show_recovery();
    }

    /// Back-to-login link on the recovery form.
    pub fn back_to_login(&mut self) {
        self.view.show_login();
    }

    /// Applies every redirect due at the current clock reading.
    ///
    /// Called by the host loop. Entries land on whatever view is active,
    /// in due order.
    pub fn tick(&mut self) {
        for pending in self.scheduler.drain_due(self.clock.now_epoch_ms()) {
            match pending {
                PendingView::Login => self.view.show_login(),
                PendingView::LoggedIn(email) => self.view.show_logged_in(&email),
            }
        }
    }

    pub fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    /// Number of redirects scheduled but not yet fired.
    pub fn pending_redirects(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn session(&self) -> &SessionStore<D, E> {
        &self.session
    }

    /// Rendering handles, exposed for test inspection.
    pub fn handles(&self) -> &H {
        self.view.handles()
    }

    /// Rendering handles, exposed for host wiring.
    pub fn handles_mut(&mut self) -> &mut H {
        self.view.handles_mut()
    }

    fn reject(&mut self, error: ValidationError) -> SubmitOutcome {
        warn!(
            "event=submit_rejected module=service status=rejected reason={}",
            error.code()
        );
        self.view.show_message(error.message(), MessageKind::Error);
        SubmitOutcome::Rejected(error)
    }

    fn schedule_redirect(&mut self, delay_ms: i64, target: PendingView) {
        let due_at_ms = self.clock.now_epoch_ms() + delay_ms;
        self.scheduler.schedule(due_at_ms, target);
    }
}
