//! Light/dark switch button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let current = ui.get_untracked().theme;
        let next = dark_mode::toggle(current);
        ui.update(|u| u.theme = next);
    };

    let label = move || if ui.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" };

    view! {
        <button class="theme-toggle" on:click=on_click title=label aria-label=label>
            {move || if ui.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
