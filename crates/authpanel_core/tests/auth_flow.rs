mod common;

use authpanel_core::{
    AuthFlow, KeyValueStore, ManualClock, MemoryKeyValueStore, MessageKind, SessionStore,
    SubmitOutcome, ValidationError, ViewController, ViewState, LOGIN_REDIRECT_DELAY_MS,
    RECOVERY_REDIRECT_DELAY_MS, SESSION_STATE_KEY,
};
use common::RecordingHandles;

type TestFlow<'a> =
    AuthFlow<MemoryKeyValueStore, MemoryKeyValueStore, RecordingHandles, &'a ManualClock>;

fn flow(clock: &ManualClock) -> TestFlow<'_> {
    AuthFlow::new(
        SessionStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new()),
        ViewController::new(RecordingHandles::new()),
        clock,
    )
}

fn assert_no_session(flow: &TestFlow<'_>) {
    assert!(flow.session().durable().is_empty());
    assert!(flow.session().ephemeral().is_empty());
}

#[test]
fn bootstrap_without_session_lands_on_login() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);

    flow.bootstrap().unwrap();
    assert_eq!(flow.view_state(), &ViewState::Login);
    assert_eq!(flow.handles().remember_checked, None);
}

#[test]
fn bootstrap_with_persisted_session_lands_on_logged_in() {
    let clock = ManualClock::new(0);
    let session = SessionStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new());
    session.persist("a@b.com", true, 1_000).unwrap();

    let mut flow: TestFlow<'_> =
        AuthFlow::new(session, ViewController::new(RecordingHandles::new()), &clock);
    flow.bootstrap().unwrap();

    assert_eq!(flow.view_state(), &ViewState::LoggedIn("a@b.com".to_string()));
    assert_eq!(flow.handles().remember_checked, Some(true));
    assert_eq!(flow.handles().logged_in_email.as_deref(), Some("a@b.com"));
}

#[test]
fn bootstrap_with_malformed_session_lands_on_login() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.session()
        .durable()
        .put(SESSION_STATE_KEY, "not json at all")
        .unwrap();

    flow.bootstrap().unwrap();
    assert_eq!(flow.view_state(), &ViewState::Login);
}

#[test]
fn login_with_short_password_is_rejected() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.bootstrap().unwrap();

    let outcome = flow.submit_login("a@b.com", "12345", true).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::PasswordTooShort)
    );
    assert_eq!(
        flow.handles().message,
        Some((
            "Password must be at least 6 characters.".to_string(),
            MessageKind::Error
        ))
    );
    assert!(flow.handles().message_visible);
    assert_eq!(flow.view_state(), &ViewState::Login);
    assert_eq!(flow.pending_redirects(), 0);
    assert_no_session(&flow);
}

#[test]
fn login_with_empty_fields_is_rejected() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.bootstrap().unwrap();

    let outcome = flow.submit_login("   ", "123456", false).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::IncompleteLoginFields)
    );
    assert_no_session(&flow);
}

#[test]
fn successful_login_persists_and_redirects_after_the_delay() {
    let clock = ManualClock::new(10_000);
    let mut flow = flow(&clock);
    flow.bootstrap().unwrap();

    let outcome = flow.submit_login("a@b.com", "123456", true).unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        flow.handles().message,
        Some((
            "Signed in, redirecting to your space.".to_string(),
            MessageKind::Info
        ))
    );

    let record = flow.session().read().unwrap().unwrap();
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.timestamp, 10_000);
    assert!(record.remember);
    assert!(flow.session().ephemeral().is_empty());

    // Still on the form until the redirect fires.
    assert_eq!(flow.view_state(), &ViewState::Login);
    flow.tick();
    assert_eq!(flow.view_state(), &ViewState::Login);

    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();
    assert_eq!(flow.view_state(), &ViewState::LoggedIn("a@b.com".to_string()));
    assert!(!flow.handles().message_visible);
}

#[test]
fn login_trims_email_and_password() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);

    let outcome = flow.submit_login("  a@b.com  ", " 123456 ", false).unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);

    let record = flow.session().read().unwrap().unwrap();
    assert_eq!(record.email, "a@b.com");
    assert!(!record.remember);
    assert!(flow.session().durable().is_empty());
}

#[test]
fn register_with_mismatched_passwords_is_rejected() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.select_register_tab();

    let outcome = flow
        .submit_register("a@b.com", "abcdef", "abcdeg", false)
        .unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::PasswordMismatch)
    );
    assert_eq!(
        flow.handles().message,
        Some(("Passwords do not match.".to_string(), MessageKind::Error))
    );
    assert_eq!(flow.view_state(), &ViewState::Register);
    assert_no_session(&flow);
}

#[test]
fn register_with_missing_confirmation_is_rejected() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.select_register_tab();

    let outcome = flow.submit_register("a@b.com", "abcdef", "", true).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::IncompleteRegisterFields)
    );
    assert_no_session(&flow);
}

#[test]
fn successful_register_signs_in_with_the_same_delay_as_login() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.select_register_tab();

    let outcome = flow
        .submit_register("new@b.com", "abcdef", "abcdef", false)
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);

    let record = flow.session().read().unwrap().unwrap();
    assert_eq!(record.email, "new@b.com");
    assert!(!record.remember);

    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();
    assert_eq!(
        flow.view_state(),
        &ViewState::LoggedIn("new@b.com".to_string())
    );
}

#[test]
fn recovery_with_empty_email_is_rejected_and_stays_on_recovery() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.open_recovery();

    let outcome = flow.submit_recovery("   ");
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::EmptyRecoveryEmail)
    );
    assert_eq!(
        flow.handles().message,
        Some(("Enter the email to reset.".to_string(), MessageKind::Error))
    );
    assert_eq!(flow.view_state(), &ViewState::Recovery);
    assert_no_session(&flow);
}

#[test]
fn recovery_acknowledges_then_returns_to_login_after_the_longer_delay() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.open_recovery();

    let outcome = flow.submit_recovery("x@y.com");
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        flow.handles().message,
        Some((
            "Reset link sent, check your inbox.".to_string(),
            MessageKind::Info
        ))
    );
    // Recovery never persists anything.
    assert_no_session(&flow);

    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();
    assert_eq!(flow.view_state(), &ViewState::Recovery);

    clock.advance(RECOVERY_REDIRECT_DELAY_MS - LOGIN_REDIRECT_DELAY_MS);
    flow.tick();
    assert_eq!(flow.view_state(), &ViewState::Login);
}

#[test]
fn logout_clears_both_backends_even_without_a_session() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.open_recovery();

    flow.logout().unwrap();
    assert_eq!(flow.view_state(), &ViewState::Login);
    assert_no_session(&flow);
}

#[test]
fn logout_after_login_erases_the_session_synchronously() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.submit_login("a@b.com", "123456", true).unwrap();
    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();

    flow.logout().unwrap();
    assert_eq!(flow.view_state(), &ViewState::Login);
    assert_no_session(&flow);
    // The farewell message is hidden by the synchronous transition.
    assert!(!flow.handles().message_visible);
}

#[test]
fn pending_redirect_lands_on_top_of_later_navigation() {
    // Navigating away does not cancel the scheduled redirect; the last
    // transition to land wins.
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);
    flow.submit_login("a@b.com", "123456", false).unwrap();

    flow.open_recovery();
    assert_eq!(flow.view_state(), &ViewState::Recovery);

    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();
    assert_eq!(flow.view_state(), &ViewState::LoggedIn("a@b.com".to_string()));
    assert_eq!(flow.pending_redirects(), 0);
}

#[test]
fn tab_and_link_events_map_to_their_views() {
    let clock = ManualClock::new(0);
    let mut flow = flow(&clock);

    flow.select_register_tab();
    assert_eq!(flow.view_state(), &ViewState::Register);

    flow.select_login_tab();
    assert_eq!(flow.view_state(), &ViewState::Login);

    flow.open_recovery();
    assert_eq!(flow.view_state(), &ViewState::Recovery);

    flow.back_to_login();
    assert_eq!(flow.view_state(), &ViewState::Login);
}
