//! Mock interview setup: type, company, and experience level.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use prep::catalog::COMPANIES;
use prep::{ExperienceLevel, InterviewType};

use crate::state::interview::MockSetupState;
use crate::util::links;

#[component]
pub fn MockInterviewPage() -> impl IntoView {
    let form = RwSignal::new(MockSetupState::default());
    let navigate = use_navigate();

    let on_start = move |_| {
        if let Some(href) = form.get_untracked().link() {
            navigate(&href, NavigateOptions::default());
        }
    };

    let type_cards = move || {
        InterviewType::ALL
            .into_iter()
            .map(|kind| {
                let minutes = kind.total_duration_secs() / 60;
                view! {
                    <button
                        type="button"
                        class="choice-card"
                        class:choice-card--selected=move || form.get().interview_type == Some(kind)
                        on:click=move |_| form.update(|f| f.interview_type = Some(kind))
                    >
                        <span class="choice-card__title">{kind.label()}</span>
                        <span class="choice-card__body">{kind.description()}</span>
                        <span class="choice-card__meta">{format!("{minutes} min")}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="mock-interview-page">
            <header class="page-header">
                <h1>"Mock Interview"</h1>
                <p class="page-header__meta">"Choose a format, a company, and your level."</p>
            </header>

            <section class="card">
                <h2>"Interview type"</h2>
                <div class="choice-grid">{type_cards}</div>
            </section>

            <section class="card">
                <div class="form__row">
                    <label class="form__label">
                        "Company"
                        <select
                            class="form__input"
                            prop:value=move || form.get().company
                            on:change=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        >
                            <option value="">"Select a company"</option>
                            {COMPANIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="form__label">
                        "Experience level"
                        <select
                            class="form__input"
                            prop:value=move || form.get().level.map(ExperienceLevel::as_str).unwrap_or_default()
                            on:change=move |ev| form.update(|f| f.level = ExperienceLevel::parse(&event_target_value(&ev)))
                        >
                            <option value="">"Select a level"</option>
                            {ExperienceLevel::ALL
                                .into_iter()
                                .map(|l| view! { <option value=l.as_str()>{l.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
            </section>

            <div class="page-actions">
                <a href=links::DASHBOARD class="btn">
                    "Cancel"
                </a>
                <button class="btn btn--primary" disabled=move || !form.get().can_start() on:click=on_start>
                    "Start Interview"
                </button>
            </div>
        </div>
    }
}
