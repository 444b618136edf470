//! Five-star rating display and picker.

use leptos::prelude::*;

const STARS: [u8; 5] = [1, 2, 3, 4, 5];

/// Read-only row of `filled` stars out of five.
#[component]
pub fn StarRating(filled: u8) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{filled} out of 5 stars")>
            {STARS
                .into_iter()
                .map(|n| {
                    view! {
                        <span class="stars__star" class:stars__star--filled=n <= filled>
                            "★"
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}

/// Clickable picker bound to `rating` (0 = unset).
#[component]
pub fn StarPicker(rating: RwSignal<u8>) -> impl IntoView {
    view! {
        <span class="stars stars--picker" role="radiogroup" aria-label="Rating">
            {STARS
                .into_iter()
                .map(|n| {
                    view! {
                        <button
                            type="button"
                            class="stars__star"
                            class:stars__star--filled=move || n <= rating.get()
                            aria-label=format!("{n} stars")
                            on:click=move |_| rating.set(n)
                        >
                            "★"
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
