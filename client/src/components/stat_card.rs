//! Dashboard/profile summary tiles.

use leptos::prelude::*;

/// Labelled headline number with an optional caption.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] caption: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {caption.map(|caption| view! { <span class="stat-card__caption">{move || caption.get()}</span> })}
        </div>
    }
}

/// Horizontal bar filled to `percent` (clamped to 100).
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u32>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-bar__fill" style:width=move || format!("{}%", percent.get().min(100))></div>
        </div>
    }
}
