//! Top navigation bar with theme toggle, feedback button, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed page. The active link is derived
//! from the current location; the mobile menu closes on any navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::feedback_modal::FeedbackModal;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::links;

const NAV: [(&str, &str); 5] = [
    (links::HOME, "Home"),
    (links::DASHBOARD, "Dashboard"),
    (links::CODING, "Coding Practice"),
    (links::INTERVIEW, "Mock Interview"),
    (links::PROFILE, "Profile"),
];

/// Whether `href` should be highlighted for `path`.
fn is_active(href: &str, path: &str) -> bool {
    if href == links::HOME {
        return path == links::HOME;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::close_menu);
    });

    let nav_links = move || {
        let path = location.pathname.get();
        NAV.into_iter()
            .map(|(href, label)| {
                let active = is_active(href, &path);
                view! {
                    <a href=href class="header__link" class:header__link--active=active>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="header">
            <a href=links::HOME class="header__brand">
                "Prepify"
            </a>
            <nav class="header__nav" class:header__nav--open=move || ui.get().menu_open>
                {nav_links}
            </nav>
            <div class="header__actions">
                <button class="btn btn--ghost" on:click=move |_| ui.update(UiState::open_feedback)>
                    "Feedback"
                </button>
                <ThemeToggle/>
                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || if ui.get().menu_open { "true" } else { "false" }
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
        <Show when=move || ui.get().feedback_open>
            <FeedbackModal/>
        </Show>
    }
}
