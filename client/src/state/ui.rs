//! Local UI chrome state (theme, mobile menu, feedback modal).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `ProgressState` so the header and modal
//! can change without touching persisted data. The first render always uses
//! the light default; the stored theme is restored once after hydration and
//! then only changes through [`UiState::toggle_theme`].

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use prep::Theme;

/// Provided as `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub feedback_open: bool,
}

impl UiState {
    /// Adopt the stored preference without touching menu or modal state.
    pub fn restore_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme and return the new value. Persisting is the caller's job.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Navigation closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_feedback(&mut self) {
        self.feedback_open = true;
        self.menu_open = false;
    }

    pub fn close_feedback(&mut self) {
        self.feedback_open = false;
    }
}
