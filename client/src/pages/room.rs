//! Chat-style interview room at `/interview/room/:room`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The room belongs to the interview started from the home page; without a
//! stored current-interview handle the page redirects home. On mount the room
//! context is fetched to learn the interview type, then the transcript opens
//! with a greeting and the first question. Every message is logged to the
//! backend; the interviewer's reply is a canned follow-up after the configured
//! delay. "End Interview" leaves for the status page of the stored interview.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use prep::source::InitializeResponse;

use crate::config::AppConfig;
use crate::state::room::{ChatRole, RoomState, end_link};
use crate::util::storage::LocalStore;
use crate::util::timer::ViewAlive;
use crate::util::{clock, links};

#[component]
pub fn RoomPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let params = use_params_map();
    let alive = ViewAlive::new();
    let room_name = params.with_untracked(|p| p.get("room")).unwrap_or_default();
    let room = RwSignal::new(None::<RoomState>);
    let handle = RwSignal::new(None::<InitializeResponse>);
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    Effect::new(move || match prep::storage::load_current_interview(&LocalStore::open()) {
        Some(stored) => handle.set(Some(stored)),
        None => {
            log::info!("no current interview; leaving room");
            navigate_home(links::HOME, NavigateOptions::default());
        }
    });

    let end_interview = Callback::new(move |()| {
        let target = handle.with_untracked(|h| end_link(h.as_ref()));
        navigate(&target, NavigateOptions::default());
    });

    #[cfg(feature = "hydrate")]
    {
        use prep::InterviewSource as _;

        let room_name = room_name.clone();
        leptos::task::spawn_local(async move {
            let source = crate::net::api::interview_source(&config);
            let interview_type = match source.context(&room_name).await {
                Ok(context) => context.interview_type,
                Err(e) => {
                    log::warn!("room context unavailable: {e}");
                    String::new()
                }
            };
            room.set(Some(RoomState::open(room_name, &interview_type, clock::now())));
        });
    }

    let send = Callback::new(move |()| {
        let Some(message) = room.try_update(|r| r.as_mut().and_then(|r| r.send(clock::now()))).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use prep::InterviewSource as _;
            use rand::SeedableRng as _;

            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let source = crate::net::api::interview_source(&config);
                let name = room.with_untracked(|r| r.as_ref().map(|r| r.room_name.clone())).unwrap_or_default();
                if let Err(e) = source.log_message(&name, &message.log_request()).await {
                    log::warn!("failed to log message: {e}");
                }
                if !alive.sleep(config.reply_delay()).await {
                    return;
                }
                let mut rng = rand::rngs::SmallRng::seed_from_u64(clock::seed());
                let text = prep::catalog::interviewer_reply(&mut rng);
                let Some(reply) = room.try_update(|r| r.as_mut().map(|r| r.receive_reply(text, clock::now()))).flatten()
                else {
                    return;
                };
                if let Err(e) = source.log_message(&name, &reply.log_request()).await {
                    log::warn!("failed to log reply: {e}");
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (message, &alive, config);
        }
    });

    let transcript = move || {
        room.get()
            .map(|r| {
                r.messages
                    .into_iter()
                    .map(|m| {
                        let class = match m.role {
                            ChatRole::User => "chat__message chat__message--user",
                            ChatRole::Assistant => "chat__message chat__message--assistant",
                            ChatRole::System => "chat__message chat__message--system",
                        };
                        view! {
                            <li class=class data-id=m.id.to_string()>
                                <p class="chat__content">{m.content}</p>
                                <span class="chat__time">{clock::format_time(m.at)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let can_send = move || room.get().is_some_and(|r| r.can_send());
    let awaiting = move || room.get().is_some_and(|r| r.awaiting_reply);

    view! {
        <div class="room-page">
            <header class="page-header">
                <h1>"Interview Room"</h1>
                <p class="page-header__meta">{room_name.clone()}</p>
                <div class="page-header__actions">
                    <a href=links::STATUS class="btn btn--ghost">
                        "Check status"
                    </a>
                    <button class="btn" on:click=move |_| end_interview.run(())>
                        "End Interview"
                    </button>
                </div>
            </header>
            <Show
                when=move || room.get().is_some()
                fallback=|| {
                    view! {
                        <div class="card loading">
                            <span class="spinner"></span>
                            <p>"Connecting to your interviewer..."</p>
                        </div>
                    }
                }
            >
                <section class="card chat">
                    <ul class="chat__messages">{transcript}</ul>
                    <Show when=awaiting>
                        <p class="chat__typing">"Interviewer is typing..."</p>
                    </Show>
                    <div class="chat__composer">
                        <textarea
                            class="form__input form__input--multiline"
                            rows="3"
                            placeholder="Type your response"
                            prop:value=move || room.get().map(|r| r.draft).unwrap_or_default()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                room.update(|r| {
                                    if let Some(r) = r.as_mut() {
                                        r.draft = text;
                                    }
                                });
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send.run(());
                                }
                            }
                        ></textarea>
                        <button class="btn btn--primary" disabled=move || !can_send() on:click=move |_| send.run(())>
                            "Send"
                        </button>
                    </div>
                </section>
            </Show>
        </div>
    }
}
