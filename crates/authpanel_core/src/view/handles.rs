//! Rendering contract between the view controller and its host surface.
//!
//! # Responsibility
//! - Name every on-screen element the controller is allowed to touch.
//! - Keep the controller free of direct handles to a rendering runtime.
//!
//! # Invariants
//! - Handle methods are plain setters: no validation, no state of
//!   their own that the controller depends on.

/// One of the four mutually exclusive screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LoginForm,
    RegisterForm,
    RecoveryForm,
    LoggedInPanel,
}

impl Region {
    /// All regions, in rendering order. Transitions iterate this so the
    /// complete visibility state is assigned on every call.
    pub const ALL: [Region; 4] = [
        Region::LoginForm,
        Region::RegisterForm,
        Region::RecoveryForm,
        Region::LoggedInPanel,
    ];
}

/// Tab highlighting state. Recovery and logged-in views mark no tab
/// as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Login,
    Register,
    None,
}

/// Message styling: errors get the warning treatment, everything else
/// renders neutrally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Info,
}

/// Title/subtitle pair shown above the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Contextual copy variant. The lookup is total: representing variants
/// as an enum removes the unknown-variant branch entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyVariant {
    Welcome,
    Recovery,
}

impl CopyVariant {
    pub fn copy(self) -> CopyText {
        match self {
            Self::Welcome => CopyText {
                title: "Welcome back!",
                subtitle: "Sign in to keep exploring your style ideas",
            },
            Self::Recovery => CopyText {
                title: "Recover password",
                subtitle: "Enter your registered email",
            },
        }
    }
}

/// Injected capability the controller renders through.
///
/// A host backs this with its real widget handles; tests back it with a
/// recording fake.
pub trait ViewHandles {
    /// Shows or hides one of the four screen regions.
    fn set_region_visible(&mut self, region: Region, visible: bool);
    /// Applies the tab highlighting rule.
    fn set_active_tab(&mut self, tab: ActiveTab);
    /// Collapses or restores the tab bar (visually, not structurally).
    fn set_tab_bar_visible(&mut self, visible: bool);
    /// Replaces the title/subtitle copy.
    fn set_copy(&mut self, copy: CopyText);
    /// Sets the email text shown verbatim on the logged-in panel.
    fn set_logged_in_email(&mut self, email: &str);
    /// Syncs the remember-me checkbox, used when rehydrating a session.
    fn set_remember_checked(&mut self, checked: bool);
    /// Shows the single-slot message region with the given styling.
    fn show_message(&mut self, text: &str, kind: MessageKind);
    /// Hides the message region. Stale hidden text is irrelevant.
    fn hide_message(&mut self);
}
