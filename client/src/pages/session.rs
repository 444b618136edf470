//! Live mock interview: one question at a time with a per-question countdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The setup comes from the query string. Questions appear after the
//! generation delay; pressing Start begins a one-second countdown loop that
//! stops when the session ends or the page is left. When the last answer is
//! in, the outcome is handed to `ResultsState` and the user is sent to the
//! results route.
//!
//! TRADE-OFFS
//! ==========
//! Under the default advisory policy the countdown only turns red at zero;
//! `AppConfig::timeout_policy` switches to auto-submitting the draft.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use prep::SessionOutcome;
use prep::session::format_clock;

use crate::components::stat_card::ProgressBar;
use crate::config::AppConfig;
#[cfg(feature = "hydrate")]
use crate::state::interview::prepare_session;
use crate::state::interview::{ResultsState, SessionPageState};
use crate::util::timer::ViewAlive;
use crate::util::{clock, links};

#[component]
pub fn SessionPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let results = expect_context::<RwSignal<ResultsState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let alive = ViewAlive::new();

    let setup =
        query.with_untracked(|q| links::parse_session(q.get_str("type"), q.get_str("company"), q.get_str("level")));
    let page = RwSignal::new(SessionPageState::generating());

    let complete = move |outcome: SessionOutcome| {
        results.update(|r| r.finished(outcome));
        navigate(links::RESULTS, NavigateOptions::default());
    };

    #[cfg(feature = "hydrate")]
    if let Some(setup) = setup.clone() {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if !alive.sleep(config.generation_delay()).await {
                return;
            }
            page.update(|p| p.prepared(prepare_session(&setup, config.timeout_policy)));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let on_start = {
        let complete = complete.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            if let Err(e) = page.try_update(|p| p.start(clock::now())).unwrap_or(Ok(())) {
                log::warn!("session start rejected: {e}");
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let complete = complete.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    loop {
                        if !alive.sleep(std::time::Duration::from_secs(1)).await {
                            break;
                        }
                        match page.try_update(|p| p.tick(clock::now())) {
                            Some(Ok(Some(outcome))) => {
                                complete(outcome);
                                break;
                            }
                            Some(Ok(None)) => {}
                            Some(Err(e)) => {
                                log::warn!("countdown stopped: {e}");
                                break;
                            }
                            None => break,
                        }
                        if !page.with_untracked(|p| p.session.as_ref().is_some_and(prep::Session::is_in_progress)) {
                            break;
                        }
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&complete, &alive);
            }
        })
    };

    let on_submit = {
        let complete = complete.clone();
        Callback::new(move |()| match page.try_update(|p| p.submit(clock::now())) {
            Some(Ok(Some(outcome))) => complete(outcome),
            Some(Ok(None)) | None => {}
            Some(Err(e)) => log::warn!("answer rejected: {e}"),
        })
    };

    let on_end = Callback::new(move |()| match page.try_update(|p| p.end(clock::now())) {
        Some(Ok(outcome)) => complete(outcome),
        Some(Err(e)) => log::warn!("end rejected: {e}"),
        None => {}
    });

    let has_setup = setup.is_some();
    let in_progress = move || page.get().session.as_ref().is_some_and(prep::Session::is_in_progress);
    let title = setup.as_ref().map_or_else(String::new, |s| {
        format!("{} interview · {} · {}", s.interview_type.label(), s.company, s.experience_level.label())
    });

    view! {
        <div class="session-page">
            <Show
                when=move || has_setup
                fallback=|| {
                    view! {
                        <div class="card empty">
                            <p>"Choose an interview type, company, and level first."</p>
                            <a href=links::INTERVIEW class="btn btn--primary">
                                "Set up interview"
                            </a>
                        </div>
                    }
                }
            >
                <header class="page-header">
                    <h1>{title.clone()}</h1>
                </header>
                <Show
                    when=move || !page.get().generating
                    fallback=|| {
                        view! {
                            <div class="card loading">
                                <span class="spinner"></span>
                                <p>"Preparing your questions..."</p>
                            </div>
                        }
                    }
                >
                    <Show
                        when=in_progress
                        fallback=move || {
                            let count = page.get().session.map_or(0, |s| s.question_count());
                            view! {
                                <div class="card session-intro">
                                    <p>{format!("{count} questions. Each one has its own timer.")}</p>
                                    <button class="btn btn--primary" on:click=move |_| on_start.run(())>
                                        "Start"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <QuestionPanel page=page/>
                        <div class="page-actions">
                            <button class="btn" on:click=move |_| on_end.run(())>
                                "End Interview"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                                {move || {
                                    let last = page.get().session.as_ref().is_some_and(prep::Session::is_last_question);
                                    if last { "Finish" } else { "Next Question" }
                                }}
                            </button>
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn QuestionPanel(page: RwSignal<SessionPageState>) -> impl IntoView {
    let session = move || page.get().session;

    let header = move || {
        session().map(|s| format!("Question {} of {}", s.current_index() + 1, s.question_count())).unwrap_or_default()
    };
    let remaining = move || session().map_or(0, |s| s.remaining_secs());
    let percent = Signal::derive(move || session().map_or(0, |s| s.progress_percent()));
    let question = move || session().and_then(|s| s.current_question().cloned());

    view! {
        <section class="card question">
            <div class="question__meta">
                <span>{header}</span>
                <span class="question__timer" class:question__timer--overtime=move || page.get().overtime>
                    {move || format_clock(remaining())}
                </span>
            </div>
            <ProgressBar percent=percent/>
            {move || {
                question()
                    .map(|q| {
                        view! {
                            <h2 class="question__prompt">{q.prompt}</h2>
                            <details class="question__follow-ups">
                                <summary>"Possible follow-ups"</summary>
                                <ul>{q.follow_up.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}</ul>
                            </details>
                            <details class="question__points">
                                <summary>"Points to cover"</summary>
                                <ul>
                                    {q.expected_points.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </details>
                        }
                    })
            }}
            <Show when=move || page.get().overtime>
                <p class="question__overtime">"Time is up for this question. Wrap up when you are ready."</p>
            </Show>
            <textarea
                class="form__input form__input--multiline question__answer"
                rows="8"
                placeholder="Type your answer"
                prop:value=move || page.get().draft
                on:input=move |ev| page.update(|p| p.draft = event_target_value(&ev))
            ></textarea>
        </section>
    }
}
