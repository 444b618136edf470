//! Interview status lookup: status by interview id, context by room name.
//!
//! `?id=` pre-fills the id; blank fields are then filled from the stored
//! current-interview handle.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use prep::source::{InterviewContext, InterviewStatus};

use crate::config::AppConfig;
use crate::state::status::StatusState;
use crate::util::storage::LocalStore;
use crate::util::{clock, links};

#[component]
pub fn StatusPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let query = use_query_map();
    let state = RwSignal::new(query.with_untracked(|q| StatusState::with_id(q.get_str("id"))));

    // The stored handle lives in localStorage, so it is only read after hydration.
    Effect::new(move || {
        if let Some(handle) = prep::storage::load_current_interview(&LocalStore::open()) {
            state.update(|s| s.prefill(&handle));
        }
    });

    let check_status = Callback::new(move |()| {
        let Some(id) = state.try_update(StatusState::begin_status).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use prep::InterviewSource as _;

            leptos::task::spawn_local(async move {
                let source = crate::net::api::interview_source(&config);
                match source.status(&id).await {
                    Ok(status) => state.update(|s| s.status_loaded(status)),
                    Err(e) => {
                        log::warn!("status lookup failed: {e}");
                        state.update(|s| s.loading = false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, config);
            state.update(|s| s.loading = false);
        }
    });

    let check_context = Callback::new(move |()| {
        let Some(room) = state.try_update(StatusState::begin_context).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use prep::InterviewSource as _;

            leptos::task::spawn_local(async move {
                let source = crate::net::api::interview_source(&config);
                match source.context(&room).await {
                    Ok(context) => state.update(|s| s.context_loaded(context)),
                    Err(e) => {
                        log::warn!("context lookup failed: {e}");
                        state.update(|s| s.loading = false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (room, config);
            state.update(|s| s.loading = false);
        }
    });

    view! {
        <div class="status-page">
            <header class="page-header">
                <h1>"Interview Status"</h1>
            </header>

            <section class="card">
                <div class="form__row">
                    <label class="form__label">
                        "Interview ID"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || state.get().interview_id
                            on:input=move |ev| state.update(|s| s.interview_id = event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        disabled=move || state.get().loading
                        on:click=move |_| check_status.run(())
                    >
                        "Check Status"
                    </button>
                </div>
                <div class="form__row">
                    <label class="form__label">
                        "Room name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || state.get().room_name
                            on:input=move |ev| state.update(|s| s.room_name = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" disabled=move || state.get().loading on:click=move |_| check_context.run(())>
                        "Get Context"
                    </button>
                </div>
            </section>

            {move || state.get().status.map(|status| view! { <StatusCard status=status/> })}
            {move || state.get().context.map(|context| view! { <ContextCard context=context/> })}
        </div>
    }
}

#[component]
fn StatusCard(status: InterviewStatus) -> impl IntoView {
    let room_href = links::room(&status.room_name);
    view! {
        <section class="card">
            <h2>"Status"</h2>
            <dl class="details">
                <dt>"Interview"</dt>
                <dd>{status.interview_id}</dd>
                <dt>"Room"</dt>
                <dd>
                    <a href=room_href>{status.room_name}</a>
                </dd>
                <dt>"Status"</dt>
                <dd>
                    <span class=format!("status-badge status-badge--{}", status.status.as_str())>
                        {status.status.as_str()}
                    </span>
                </dd>
                <dt>"Current question"</dt>
                <dd>{status.current_question}</dd>
                <dt>"Questions asked"</dt>
                <dd>{status.total_questions_asked}</dd>
                <dt>"Feedback"</dt>
                <dd>{if status.feedback_available { "Available" } else { "Not yet" }}</dd>
                <dt>"Started"</dt>
                <dd>{format!("{} {}", clock::format_date(status.created_at), clock::format_time(status.created_at))}</dd>
                <dt>"Last activity"</dt>
                <dd>{prep::stats::relative_time(status.last_activity, clock::now())}</dd>
            </dl>
        </section>
    }
}

#[component]
fn ContextCard(context: InterviewContext) -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Room context"</h2>
            <dl class="details">
                <dt>"Room"</dt>
                <dd>{context.room_name}</dd>
                <dt>"Type"</dt>
                <dd>{context.interview_type}</dd>
                <dt>"Duration"</dt>
                <dd>{context.duration}</dd>
                <dt>"Progress"</dt>
                <dd>{format!("Question {} of {}", context.question_number, context.total_questions)}</dd>
                <dt>"Current question"</dt>
                <dd>{context.current_question}</dd>
                <dt>"Participants"</dt>
                <dd>{context.participant_count}</dd>
            </dl>
        </section>
    }
}
