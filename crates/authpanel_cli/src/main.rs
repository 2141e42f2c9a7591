//! CLI walkthrough entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that wires `authpanel_core` to a
//!   console renderer and exercises the whole flow.
//! - Keep output deterministic for quick local sanity checks.

use authpanel_core::{
    ActiveTab, AuthFlow, CopyText, ManualClock, MemoryKeyValueStore, MessageKind, Region,
    SessionStore, SqliteKeyValueStore, SubmitOutcome, ViewController, ViewHandles,
    LOGIN_REDIRECT_DELAY_MS, RECOVERY_REDIRECT_DELAY_MS,
};

/// Console renderer: prints every handle call as one line.
struct ConsoleHandles;

fn region_name(region: Region) -> &'static str {
    match region {
        Region::LoginForm => "login-form",
        Region::RegisterForm => "register-form",
        Region::RecoveryForm => "recovery-form",
        Region::LoggedInPanel => "logged-in-panel",
    }
}

impl ViewHandles for ConsoleHandles {
    fn set_region_visible(&mut self, region: Region, visible: bool) {
        if visible {
            println!("  [render] show {}", region_name(region));
        }
    }

    fn set_active_tab(&mut self, tab: ActiveTab) {
        let label = match tab {
            ActiveTab::Login => "login",
            ActiveTab::Register => "register",
            ActiveTab::None => "none",
        };
        println!("  [render] active tab: {label}");
    }

    fn set_tab_bar_visible(&mut self, visible: bool) {
        println!("  [render] tab bar visible: {visible}");
    }

    fn set_copy(&mut self, copy: CopyText) {
        println!("  [render] title: {}", copy.title);
    }

    fn set_logged_in_email(&mut self, email: &str) {
        println!("  [render] logged-in email: {email}");
    }

    fn set_remember_checked(&mut self, checked: bool) {
        println!("  [render] remember checkbox: {checked}");
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        let style = match kind {
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        };
        println!("  [message/{style}] {text}");
    }

    fn hide_message(&mut self) {}
}

fn main() {
    println!("authpanel_core version={}", authpanel_core::core_version());

    // In-memory sqlite keeps the walkthrough self-contained; a real host
    // would open a file with `SqliteKeyValueStore::open`.
    let durable = match SqliteKeyValueStore::open_in_memory() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open durable store: {err}");
            std::process::exit(1);
        }
    };
    let session = SessionStore::new(durable, MemoryKeyValueStore::new());

    let clock = ManualClock::new(1_000);
    let mut flow = AuthFlow::new(session, ViewController::new(ConsoleHandles), &clock);

    println!("-- startup --");
    if let Err(err) = flow.bootstrap() {
        eprintln!("bootstrap failed: {err}");
        std::process::exit(1);
    }

    println!("-- login with a short password --");
    report(flow.submit_login("demo@example.com", "12345", true));

    println!("-- login again, remembered --");
    report(flow.submit_login("demo@example.com", "123456", true));
    clock.advance(LOGIN_REDIRECT_DELAY_MS);
    flow.tick();

    println!("-- logout --");
    if let Err(err) = flow.logout() {
        eprintln!("logout failed: {err}");
        std::process::exit(1);
    }

    println!("-- password recovery --");
    flow.open_recovery();
    report(Ok(flow.submit_recovery("demo@example.com")));
    clock.advance(RECOVERY_REDIRECT_DELAY_MS);
    flow.tick();
}

fn report(outcome: Result<SubmitOutcome, authpanel_core::StoreError>) {
    match outcome {
        Ok(SubmitOutcome::Accepted) => println!("  [outcome] accepted"),
        Ok(SubmitOutcome::Rejected(err)) => println!("  [outcome] rejected: {err}"),
        Err(err) => {
            eprintln!("storage failure: {err}");
            std::process::exit(1);
        }
    }
}
