//! Landing page: hero, practice-interview starter form, testimonials.
//!
//! SYSTEM CONTEXT
//! ==============
//! The starter form posts to the interview backend. Whatever comes back, real
//! or synthetic, is stored as the current interview and the user is sent to
//! its room.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::star_rating::StarRating;
use crate::config::AppConfig;
use crate::state::home::{DURATIONS, INTERVIEW_TYPES, StartForm};
use crate::state::progress::ProgressState;
use crate::util::links;

const FEATURES: [(&str, &str); 4] = [
    ("Coding Practice", "Generated problems by difficulty, topic, and company with instant test feedback."),
    ("Mock Interviews", "Timed technical, behavioral, and system design sessions with follow-up prompts."),
    ("Detailed Analysis", "Scores across communication, technical depth, problem solving, and fit."),
    ("Progress Tracking", "Streaks, success rates, and achievements across everything you practice."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();
    let config = expect_context::<AppConfig>();
    let form = RwSignal::new(StartForm::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let Some(request) = form.try_update(StartForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use prep::InterviewSource as _;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let source = crate::net::api::interview_source(&config);
                let result = source.initialize(&request).await;
                form.update(StartForm::finish_submit);
                match result {
                    Ok(handle) => {
                        crate::util::storage::log_write(
                            "current interview",
                            prep::storage::save_current_interview(&mut crate::util::storage::LocalStore::open(), &handle),
                        );
                        navigate(&links::room(&handle.room_name), NavigateOptions::default());
                    }
                    Err(e) => log::warn!("interview initialize failed: {e}"),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, config);
            form.update(StartForm::finish_submit);
        }
    });

    let select_options = |options: &'static [(&'static str, &'static str)]| {
        options
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Ace your next interview"</h1>
                <p class="hero__subtitle">
                    "Practice coding problems and mock interviews, then track how you improve."
                </p>
                <div class="hero__actions">
                    <a href=links::CODING class="btn btn--primary">
                        "Start Coding"
                    </a>
                    <a href=links::INTERVIEW class="btn">
                        "Mock Interview"
                    </a>
                </div>
            </section>

            <section class="home-page__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature-card">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home-page__start card">
                <h2>"Start a practice interview"</h2>
                <label class="form__label">
                    "Job description"
                    <textarea
                        class="form__input form__input--multiline"
                        rows="5"
                        placeholder="Paste the job description"
                        prop:value=move || form.get().request.job_description
                        on:input=move |ev| form.update(|f| f.request.job_description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__row">
                    <label class="form__label">
                        "Interview type"
                        <select
                            class="form__input"
                            prop:value=move || form.get().request.interview_type
                            on:change=move |ev| form.update(|f| f.request.interview_type = event_target_value(&ev))
                        >
                            {select_options(&INTERVIEW_TYPES)}
                        </select>
                    </label>
                    <label class="form__label">
                        "Duration"
                        <select
                            class="form__input"
                            prop:value=move || form.get().request.duration
                            on:change=move |ev| form.update(|f| f.request.duration = event_target_value(&ev))
                        >
                            {select_options(&DURATIONS)}
                        </select>
                    </label>
                </div>
                <label class="form__label">
                    "Resume"
                    <textarea
                        class="form__input form__input--multiline"
                        rows="5"
                        placeholder="Paste your resume"
                        prop:value=move || form.get().request.resume
                        on:input=move |ev| form.update(|f| f.request.resume = event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || !form.get().is_complete() || form.get().submitting
                    on:click=move |_| submit.run(())
                >
                    {move || if form.get().submitting { "Starting..." } else { "Start Interview" }}
                </button>
            </section>

            <section class="home-page__testimonials">
                <h2>"What candidates say"</h2>
                <div class="testimonials">
                    {move || {
                        progress
                            .get()
                            .testimonials()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <figure class="testimonial">
                                        <StarRating filled=t.rating/>
                                        <blockquote>{t.content}</blockquote>
                                        <figcaption>
                                            <strong>{t.name}</strong>
                                            <span>{t.role}</span>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
