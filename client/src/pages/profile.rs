//! Profile: achievements, interview history, and practice breakdowns.

use leptos::prelude::*;

use prep::analysis::ScoreBand;

use crate::components::stat_card::{ProgressBar, StatCard};
use crate::state::progress::ProgressState;
use crate::util::clock;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    let interviews = Memo::new(move |_| progress.get().interview_summary(clock::now()));
    let coding = Memo::new(move |_| progress.get().coding_summary(clock::now()));

    let achievements = move || {
        progress
            .get()
            .achievements(clock::now())
            .into_iter()
            .map(|a| {
                view! {
                    <li class="achievement" class:achievement--earned=a.earned>
                        <span class="achievement__title">{a.kind.title()}</span>
                        <span class="achievement__description">{a.kind.description()}</span>
                        <ProgressBar percent=a.progress/>
                        <span class="achievement__progress">{a.label()}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let history = move || {
        let mut records = progress.get().history;
        if records.is_empty() {
            return view! { <p class="empty">"No mock interviews yet."</p> }.into_any();
        }
        records.sort_by(|a, b| b.date.cmp(&a.date));
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Company"</th>
                        <th>"Score"</th>
                        <th>"Answered"</th>
                        <th>"Minutes"</th>
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|r| {
                            let band = ScoreBand::from_score(r.score).css_class();
                            view! {
                                <tr>
                                    <td>{clock::format_date(r.date)}</td>
                                    <td>{r.interview_type.label()}</td>
                                    <td>{r.company}</td>
                                    <td class=band>{format!("{}%", r.score)}</td>
                                    <td>{format!("{}/{}", r.questions_answered, r.total_questions)}</td>
                                    <td>{r.duration_minutes}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
            .into_any()
    };

    let counts = |rows: Vec<(String, u32)>| {
        rows.into_iter()
            .map(|(label, count)| {
                view! {
                    <li class="counts__row">
                        <span>{label}</span>
                        <span>{count}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };
    let by_type = move || {
        counts(interviews.get().by_type.into_iter().map(|(t, n)| (t.label().to_owned(), n)).collect())
    };
    let by_company = move || counts(interviews.get().by_company.into_iter().collect());
    let by_category = move || counts(coding.get().by_category.into_iter().map(|(c, b)| (c, b.solved)).collect());

    view! {
        <div class="profile-page">
            <header class="page-header">
                <h1>"Your Profile"</h1>
            </header>

            <section class="stat-grid">
                <StatCard
                    label="Interviews Completed"
                    value=Signal::derive(move || {
                        let s = interviews.get();
                        format!("{}/{}", s.completed, s.total)
                    })
                />
                <StatCard label="Best Score" value=Signal::derive(move || format!("{}%", interviews.get().best_score))/>
                <StatCard
                    label="Completion Rate"
                    value=Signal::derive(move || format!("{}%", interviews.get().success_rate))
                />
                <StatCard
                    label="Coding Success"
                    value=Signal::derive(move || format!("{}%", coding.get().average_success_rate))
                    caption=Signal::derive(|| "average per problem".to_owned())
                />
            </section>

            <section class="card">
                <h2>"Achievements"</h2>
                <ul class="achievements">{achievements}</ul>
            </section>

            <section class="card">
                <h2>"Interview history"</h2>
                {history}
            </section>

            <section class="card profile-page__counts">
                <div>
                    <h3>"By type"</h3>
                    <ul class="counts">{by_type}</ul>
                </div>
                <div>
                    <h3>"By company"</h3>
                    <ul class="counts">{by_company}</ul>
                </div>
                <div>
                    <h3>"Solved by topic"</h3>
                    <ul class="counts">{by_category}</ul>
                </div>
            </section>
        </div>
    }
}
