//! Results for the interview that just finished.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the outcome parked in `ResultsState` by the session page. The
//! analysis appears after the generation delay and the history record is
//! written exactly once, even if the page is revisited.

use leptos::prelude::*;

use prep::analysis::{AnalysisReport, ScoreBand, stars};

use crate::components::star_rating::StarRating;
use crate::components::stat_card::ProgressBar;
use crate::config::AppConfig;
use crate::state::interview::ResultsState;
use crate::state::progress::ProgressState;
use crate::util::links;
#[cfg(feature = "hydrate")]
use crate::util::storage::{LocalStore, log_write};
use crate::util::timer::ViewAlive;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let results = expect_context::<RwSignal<ResultsState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();
    let alive = ViewAlive::new();

    let pending = results.with_untracked(|r| r.outcome.is_some() && r.report.is_none());
    if pending {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !alive.sleep(config.generation_delay()).await {
                return;
            }
            record_analysis(results, progress);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (alive, config, progress);
        }
    }

    view! {
        <div class="results-page">
            {move || {
                let state = results.get();
                match (state.outcome, state.report) {
                    (None, _) => {
                        view! {
                            <div class="card empty">
                                <p>"There is no finished interview to review."</p>
                                <a href=links::INTERVIEW class="btn btn--primary">
                                    "Start a mock interview"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                    (Some(_), None) => {
                        view! {
                            <div class="card loading">
                                <span class="spinner"></span>
                                <p>"Analyzing your answers..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    (Some(outcome), Some(report)) => {
                        let answers = outcome
                            .questions
                            .iter()
                            .zip(&outcome.responses)
                            .map(|(q, a)| {
                                let answer = if a.trim().is_empty() { "No answer".to_owned() } else { a.clone() };
                                view! {
                                    <li class="answer-review">
                                        <p class="answer-review__prompt">{q.prompt.clone()}</p>
                                        <p class="answer-review__answer">{answer}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <ReportView report=report/>
                            <section class="card">
                                <h2>"Your answers"</h2>
                                <p class="page-header__meta">
                                    {format!(
                                        "{} · {} · {} min",
                                        outcome.setup.interview_type.label(),
                                        outcome.setup.company,
                                        outcome.duration_minutes,
                                    )}
                                </p>
                                <ol>{answers}</ol>
                            </section>
                            <div class="page-actions">
                                <a href=links::DASHBOARD class="btn">
                                    "Dashboard"
                                </a>
                                <a href=links::INTERVIEW class="btn btn--primary">
                                    "Practice again"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Attach the analysis and persist the history record if not yet written.
#[cfg(feature = "hydrate")]
fn record_analysis(results: RwSignal<ResultsState>, progress: RwSignal<ProgressState>) {
    let Some(record) = results.try_update(|r| r.analysed(AnalysisReport::mock())).flatten() else {
        return;
    };
    log::info!("recording interview: score={}", record.score);
    let mut store = LocalStore::open();
    progress.update(|p| {
        log_write("interview history", p.record_interview(record, &mut store));
    });
}

#[component]
fn ReportView(report: AnalysisReport) -> impl IntoView {
    let band = ScoreBand::from_score(report.overall_score);
    let list = |items: Vec<String>| items.into_iter().map(|i| view! { <li>{i}</li> }).collect::<Vec<_>>();

    view! {
        <section class="card score">
            <div class=format!("score__overall {}", band.css_class())>{format!("{}%", report.overall_score)}</div>
            <StarRating filled=stars(report.overall_score)/>
            <p class="score__feedback">{report.feedback.clone()}</p>
        </section>
        <section class="card">
            <h2>"Breakdown"</h2>
            {report
                .breakdown
                .rows()
                .into_iter()
                .map(|(label, score)| {
                    view! {
                        <div class="breakdown__row">
                            <span class="breakdown__label">{label}</span>
                            <ProgressBar percent=u32::from(score)/>
                            <span class="breakdown__count">{format!("{score}%")}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
        <section class="card results-page__lists">
            <div>
                <h2>"Strengths"</h2>
                <ul>{list(report.strengths)}</ul>
            </div>
            <div>
                <h2>"Areas to improve"</h2>
                <ul>{list(report.improvements)}</ul>
            </div>
            <div>
                <h2>"Next steps"</h2>
                <ol>{list(report.next_steps)}</ol>
            </div>
        </section>
    }
}
