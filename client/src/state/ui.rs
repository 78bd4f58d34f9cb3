//! Local UI chrome state (navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so the navigation
//! chrome can change without touching page orchestration.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Site chrome state provided via context from `App`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the slide-out navigation menu is open.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
