//! Dashboard: headline stats, difficulty breakdown, recent and monthly activity.

use leptos::prelude::*;

use prep::stats::{ActivityKind, relative_time};

use crate::components::stat_card::{ProgressBar, StatCard};
use crate::config::AppConfig;
use crate::state::progress::ProgressState;
use crate::util::{clock, links};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();
    let config = expect_context::<AppConfig>();

    let coding = Memo::new(move |_| progress.get().coding_summary(clock::now()));
    let interviews = Memo::new(move |_| progress.get().interview_summary(clock::now()));

    let solved = move || {
        let c = coding.get();
        format!("{}/{}", c.solved, c.total_problems)
    };
    let streak = move || {
        let days = coding.get().streak.max(interviews.get().streak);
        if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
    };

    let breakdown = move || {
        coding
            .get()
            .by_difficulty
            .into_iter()
            .map(|(difficulty, b)| {
                let percent = prep::stats::percentage(b.solved, b.total);
                view! {
                    <div class="breakdown__row">
                        <span class="breakdown__label">{difficulty.as_str()}</span>
                        <ProgressBar percent=percent/>
                        <span class="breakdown__count">{format!("{}/{}", b.solved, b.total)}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let recent = move || {
        let now = clock::now();
        let items = progress.get().recent_activity(config.recent_activity_limit);
        if items.is_empty() {
            return view! { <p class="empty">"No activity yet. Solve a problem or take a mock interview."</p> }
                .into_any();
        }
        view! {
            <ul class="activity">
                {items
                    .into_iter()
                    .map(|item| {
                        let icon = match item.kind {
                            ActivityKind::Coding => "activity__icon activity__icon--coding",
                            ActivityKind::Interview => "activity__icon activity__icon--interview",
                        };
                        view! {
                            <li class="activity__item">
                                <span class=icon></span>
                                <span class="activity__title">{item.title}</span>
                                <span class="activity__time">{relative_time(item.at, now)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    };

    let monthly = move || {
        progress
            .get()
            .monthly_activity()
            .into_iter()
            .map(|m| {
                view! {
                    <tr>
                        <td>{format!("{} {}", m.label(), m.year)}</td>
                        <td>{m.problems}</td>
                        <td>{m.interviews}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <div class="page-header__actions">
                    <a href=links::CODING class="btn btn--primary">
                        "Practice Coding"
                    </a>
                    <a href=links::INTERVIEW class="btn">
                        "Mock Interview"
                    </a>
                </div>
            </header>

            <section class="stat-grid">
                <StatCard label="Problems Solved" value=Signal::derive(solved)/>
                <StatCard
                    label="Success Rate"
                    value=Signal::derive(move || format!("{}%", coding.get().success_rate))
                    caption=Signal::derive(move || format!("{} attempts", coding.get().attempts))
                />
                <StatCard
                    label="Mock Interviews"
                    value=Signal::derive(move || interviews.get().total.to_string())
                    caption=Signal::derive(move || format!("{} min practiced", interviews.get().total_minutes))
                />
                <StatCard
                    label="Average Score"
                    value=Signal::derive(move || format!("{}%", interviews.get().average_score))
                />
                <StatCard label="Current Streak" value=Signal::derive(streak)/>
            </section>

            <section class="card">
                <h2>"Progress by difficulty"</h2>
                <div class="breakdown">{breakdown}</div>
            </section>

            <section class="card">
                <h2>"Recent activity"</h2>
                {recent}
            </section>

            <section class="card">
                <h2>"Monthly activity"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th>"Problems"</th>
                            <th>"Interviews"</th>
                        </tr>
                    </thead>
                    <tbody>{monthly}</tbody>
                </table>
            </section>
        </div>
    }
}
