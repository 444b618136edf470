//! "Share your experience" dialog opened from the header.
//!
//! Submitting prepends the feedback to the persisted list so it shows up
//! first among the home page testimonials.

use leptos::prelude::*;

use crate::components::star_rating::StarPicker;
use crate::state::feedback::FeedbackForm;
use crate::state::progress::ProgressState;
use crate::state::ui::UiState;
use crate::util::clock;
use crate::util::storage::{LocalStore, log_write};

#[component]
pub fn FeedbackModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();
    let form = RwSignal::new(FeedbackForm::default());
    let rating = RwSignal::new(0_u8);

    Effect::new(move || {
        let stars = rating.get();
        form.update(|f| f.rating = stars);
    });

    let on_close = Callback::new(move |()| {
        form.set(FeedbackForm::default());
        rating.set(0);
        ui.update(UiState::close_feedback);
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let submit = Callback::new(move |()| {
        let mut next = form.get_untracked();
        match next.submit(clock::now()) {
            Ok(feedback) => {
                let mut store = LocalStore::open();
                progress.update(|p| {
                    log_write("feedback", p.add_feedback(feedback, &mut store));
                });
                on_close.run(());
            }
            Err(e) => {
                log::debug!("feedback rejected: {e}");
                form.set(next);
            }
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--feedback"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Share Your Experience"</h2>

                <label class="dialog__label">
                    "Rating"
                    <StarPicker rating=rating/>
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Software Engineer"
                        prop:value=move || form.get().role
                        on:input=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Your experience"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        rows="4"
                        prop:value=move || form.get().content
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || form.get().error.is_some()>
                    <p class="dialog__error">{move || form.get().error.unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !form.get().can_submit()
                        on:click=move |_| submit.run(())
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
