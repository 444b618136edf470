//! Theme initialization and toggle.
//!
//! Reads the stored preference through `prep::storage`, applies it as a
//! `data-theme` attribute plus a `dark` class on `<html>`, and persists
//! changes back to `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! The preference is read once after hydration and then lives in `UiState`;
//! nothing re-reads storage afterwards. SSR paths no-op so server output is
//! always the light theme, and the first client render matches it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use prep::Theme;

use crate::util::storage::{LocalStore, log_write};

/// Stored preference, else the system `prefers-color-scheme`, else light.
pub fn read_preference() -> Theme {
    if let Some(theme) = prep::storage::load_theme(&LocalStore::open()) {
        return theme;
    }
    Theme::from_dark(system_prefers_dark())
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").unwrap_or_default())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Reflect `theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to set data-theme: {e:?}");
        }
        if let Err(e) = el.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("failed to toggle dark class: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    log_write("theme", prep::storage::save_theme(&mut LocalStore::open(), next));
    next
}
