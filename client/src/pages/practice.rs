//! Coding practice browser and problem generator.
//!
//! Listed problems link to the solver with their own difficulty and
//! category; the generator panel builds the same link from free selections.

use leptos::prelude::*;

use prep::Difficulty;
use prep::catalog::{CATEGORIES, COMPANIES};

use crate::state::practice::{ALL, PracticeState, difficulty_class};
use crate::state::progress::ProgressState;
use crate::util::{clock, links};

#[component]
pub fn PracticePage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();
    let practice = RwSignal::new(PracticeState::default());

    let summary = Memo::new(move |_| progress.get().coding_summary(clock::now()));

    let problem_rows = move || {
        let problems = progress.get().problems;
        let state = practice.get();
        let visible = state.visible(&problems);
        if visible.is_empty() {
            return view! { <p class="empty">"No problems match these filters."</p> }.into_any();
        }
        view! {
            <ul class="problem-list">
                {visible
                    .into_iter()
                    .map(|p| {
                        let href = links::solver(p.difficulty, &p.category, None);
                        view! {
                            <li class="problem-list__item" class:problem-list__item--solved=p.solved>
                                <a href=href class="problem-list__link">
                                    <span class="problem-list__title">{p.title.clone()}</span>
                                    <span class=difficulty_class(p.difficulty)>{p.difficulty.as_str()}</span>
                                    <span class="problem-list__category">{p.category.clone()}</span>
                                    <span class="problem-list__meta">
                                        {format!("{} attempts · {}% success", p.attempts, p.success_rate)}
                                    </span>
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    };

    let category_options = || {
        CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect::<Vec<_>>()
    };

    view! {
        <div class="practice-page">
            <header class="page-header">
                <h1>"Coding Practice"</h1>
                <p class="page-header__meta">
                    {move || {
                        let s = summary.get();
                        format!("{} of {} solved · {}% success rate", s.solved, s.total_problems, s.success_rate)
                    }}
                </p>
            </header>

            <section class="filters">
                <input
                    class="form__input filters__search"
                    type="search"
                    placeholder="Search problems"
                    prop:value=move || practice.get().filter.search
                    on:input=move |ev| practice.update(|p| p.set_search(event_target_value(&ev)))
                />
                <select
                    class="form__input"
                    prop:value=move || practice.get().difficulty_value()
                    on:change=move |ev| practice.update(|p| p.set_difficulty(&event_target_value(&ev)))
                >
                    <option value=ALL>"All difficulties"</option>
                    {Difficulty::ALL
                        .into_iter()
                        .map(|d| view! { <option value=d.as_str()>{d.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="form__input"
                    prop:value=move || practice.get().category_value()
                    on:change=move |ev| practice.update(|p| p.set_category(&event_target_value(&ev)))
                >
                    <option value=ALL>"All categories"</option>
                    {category_options()}
                </select>
            </section>

            {problem_rows}

            <GeneratorPanel/>
        </div>
    }
}

/// Pick difficulty, topic, and company, then open a freshly generated problem.
#[component]
fn GeneratorPanel() -> impl IntoView {
    let difficulty = RwSignal::new(Difficulty::Medium);
    let category = RwSignal::new(CATEGORIES[0].to_owned());
    let company = RwSignal::new(String::new());

    let href = move || {
        let company = company.get();
        let company = (!company.is_empty()).then_some(company.as_str());
        links::solver(difficulty.get(), &category.get(), company)
    };

    view! {
        <section class="card generator">
            <h2>"Generate a problem"</h2>
            <div class="form__row">
                <select
                    class="form__input"
                    prop:value=move || difficulty.get().as_str()
                    on:change=move |ev| {
                        if let Some(d) = Difficulty::parse(&event_target_value(&ev)) {
                            difficulty.set(d);
                        }
                    }
                >
                    {Difficulty::ALL
                        .into_iter()
                        .map(|d| view! { <option value=d.as_str()>{d.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="form__input"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect::<Vec<_>>()}
                </select>
                <select
                    class="form__input"
                    prop:value=move || company.get()
                    on:change=move |ev| company.set(event_target_value(&ev))
                >
                    <option value="">"Any company"</option>
                    {COMPANIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect::<Vec<_>>()}
                </select>
            </div>
            <a class="btn btn--primary" href=href>
                "Generate"
            </a>
        </section>
    }
}
