//! View state machine and transition operations.
//!
//! # Responsibility
//! - Own the single active `ViewState`.
//! - Render each state as a total assignment over every screen element.
//!
//! # Invariants
//! - Transitions are unconditional and idempotent; there is no error
//!   path and no partial state.
//! - Each transition sets the visibility of all four regions, never only
//!   the newly active one, so no stale region can survive a switch.
//! - `hide_message` runs as the final step of every transition.

use super::handles::{ActiveTab, CopyVariant, MessageKind, Region, ViewHandles};
use log::info;

/// The single currently-active UI mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Register,
    Recovery,
    LoggedIn(String),
}

impl ViewState {
    /// The one region visible in this state.
    pub fn visible_region(&self) -> Region {
        match self {
            Self::Login => Region::LoginForm,
            Self::Register => Region::RegisterForm,
            Self::Recovery => Region::RecoveryForm,
            Self::LoggedIn(_) => Region::LoggedInPanel,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Recovery => "recovery",
            Self::LoggedIn(_) => "logged_in",
        }
    }
}

/// Owns the active view state and renders it through injected handles.
pub struct ViewController<H: ViewHandles> {
    state: ViewState,
    handles: H,
}

impl<H: ViewHandles> ViewController<H> {
    /// Creates a controller in the login state without rendering it.
    /// Call one of the transitions (or the flow's bootstrap) to paint.
    pub fn new(handles: H) -> Self {
        Self {
            state: ViewState::Login,
            handles,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn handles(&self) -> &H {
        &self.handles
    }

    /// Mutable access to the rendering handles, for host event wiring.
    pub fn handles_mut(&mut self) -> &mut H {
        &mut self.handles
    }

    pub fn show_login(&mut self) {
        self.apply(ViewState::Login, ActiveTab::Login, CopyVariant::Welcome, true);
    }

    pub fn show_register(&mut self) {
        self.apply(
            ViewState::Register,
            ActiveTab::Register,
            CopyVariant::Welcome,
            true,
        );
    }

    pub fn show_recovery(&mut self) {
        self.apply(
            ViewState::Recovery,
            ActiveTab::None,
            CopyVariant::Recovery,
            false,
        );
    }

    pub fn show_logged_in(&mut self, email: &str) {
        self.handles.set_logged_in_email(email);
        self.apply(
            ViewState::LoggedIn(email.to_string()),
            ActiveTab::None,
            CopyVariant::Welcome,
            true,
        );
    }

    /// Total-assignment render shared by all four transitions.
    fn apply(
        &mut self,
        state: ViewState,
        tab: ActiveTab,
        copy: CopyVariant,
        tab_bar_visible: bool,
    ) {
        let visible = state.visible_region();
        for region in Region::ALL {
            self.handles.set_region_visible(region, region == visible);
        }
        self.handles.set_active_tab(tab);
        self.handles.set_copy(copy.copy());
        self.handles.set_tab_bar_visible(tab_bar_visible);
        self.handles.hide_message();

        info!(
            "event=view_transition module=view status=ok state={}",
            state.name()
        );
        self.state = state;
    }

    /// Shows a message without changing the view state.
    pub fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.handles.show_message(text, kind);
    }

    /// Syncs the remember checkbox to a rehydrated session flag.
    pub fn set_remember_checked(&mut self, checked: bool) {
        self.handles.set_remember_checked(checked);
    }
}
