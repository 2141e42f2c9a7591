//! Recording `ViewHandles` fake shared by the integration tests.

use authpanel_core::{ActiveTab, CopyText, MessageKind, Region, ViewHandles};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RecordingHandles {
    pub region_visible: HashMap<Region, bool>,
    pub active_tab: Option<ActiveTab>,
    pub tab_bar_visible: Option<bool>,
    pub copy: Option<CopyText>,
    pub logged_in_email: Option<String>,
    pub remember_checked: Option<bool>,
    pub message: Option<(String, MessageKind)>,
    pub message_visible: bool,
}

impl RecordingHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions currently rendered as visible, in declaration order.
    pub fn visible_regions(&self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|region| self.region_visible.get(region) == Some(&true))
            .collect()
    }
}

impl ViewHandles for RecordingHandles {
    fn set_region_visible(&mut self, region: Region, visible: bool) {
        self.region_visible.insert(region, visible);
    }

    fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = Some(tab);
    }

    fn set_tab_bar_visible(&mut self, visible: bool) {
        self.tab_bar_visible = Some(visible);
    }

    fn set_copy(&mut self, copy: CopyText) {
        self.copy = Some(copy);
    }

    fn set_logged_in_email(&mut self, email: &str) {
        self.logged_in_email = Some(email.to_string());
    }

    fn set_remember_checked(&mut self, checked: bool) {
        self.remember_checked = Some(checked);
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.message = Some((text.to_string(), kind));
        self.message_visible = true;
    }

    fn hide_message(&mut self) {
        // Text is left stale on purpose; a hidden region's text is
        // irrelevant.
        self.message_visible = false;
    }
}
