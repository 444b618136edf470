//! Problem solver: generated statement, code editor, simulated test runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `difficulty`, `category`, and `company` from the query string. The
//! problem appears after the configured generation delay; each run waits the
//! run delay, then records an attempt (or a solve) against the listed
//! problem with the same difficulty and category.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use prep::{Difficulty, catalog};

use crate::config::AppConfig;
use crate::state::practice::difficulty_class;
use crate::state::progress::ProgressState;
use crate::state::solver::{SolverPhase, SolverState};
use crate::util::storage::{LocalStore, log_write};
use crate::util::timer::ViewAlive;
use crate::util::{clock, links};

#[component]
pub fn SolverPage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();
    let config = expect_context::<AppConfig>();
    let query = use_query_map();
    let alive = ViewAlive::new();

    let selection = query.with_untracked(|q| {
        links::parse_solver(q.get_str("difficulty"), q.get_str("category"), q.get_str("company"))
    });
    let solver = RwSignal::new(if selection.is_some() { SolverState::default() } else { SolverState::missing() });

    #[cfg(feature = "hydrate")]
    if let Some((difficulty, category, company)) = selection.clone() {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if !alive.sleep(config.generation_delay()).await {
                return;
            }
            let problem = catalog::generate_problem(difficulty, &category, company.as_deref());
            log::info!("generated {} {} problem", difficulty.as_str(), category);
            solver.update(|s| s.loaded(problem));
        });
    }

    let run = Callback::new(move |()| {
        if !solver.try_update(SolverState::begin_run).unwrap_or(false) {
            return;
        }
        let Some((difficulty, category, _)) = selection.clone() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                if !alive.sleep(config.run_delay()).await {
                    return;
                }
                finish_run(solver, progress, difficulty, &category);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&alive, config);
            finish_run(solver, progress, difficulty, &category);
        }
    });

    view! {
        <div class="solver-page">
            {move || match solver.get().phase {
                SolverPhase::Missing => {
                    view! {
                        <div class="card empty">
                            <p>"Pick a difficulty and topic to generate a problem."</p>
                            <a href=links::CODING class="btn btn--primary">
                                "Back to practice"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                SolverPhase::Generating => {
                    view! {
                        <div class="card loading">
                            <span class="spinner"></span>
                            <p>"Generating your problem..."</p>
                        </div>
                    }
                        .into_any()
                }
                SolverPhase::Ready => view! { <SolverWorkspace solver=solver run=run/> }.into_any(),
            }}
        </div>
    }
}

/// Grade the editor contents and record the outcome against the listed problem.
fn finish_run(solver: RwSignal<SolverState>, progress: RwSignal<ProgressState>, difficulty: Difficulty, category: &str) {
    let results = solver.with_untracked(|s| {
        s.problem.as_ref().map(|p| catalog::run_tests(p, &s.code)).unwrap_or_default()
    });
    let Some(passed) = solver.try_update(|s| s.finish_run(results)) else {
        return;
    };
    log::info!("test run finished: passed={passed}");
    let mut store = LocalStore::open();
    progress.update(|p| {
        log_write("problems", p.record_run(difficulty, category, passed, clock::now(), &mut store));
    });
}

#[component]
fn SolverWorkspace(solver: RwSignal<SolverState>, run: Callback<()>) -> impl IntoView {
    let Some(problem) = solver.get_untracked().problem else {
        return ().into_any();
    };

    let hints = move || {
        let state = solver.get();
        let shown = state.hints_revealed;
        state
            .problem
            .map(|p| p.hints.into_iter().take(shown).map(|h| view! { <li>{h}</li> }).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    let results = move || {
        solver
            .get()
            .results
            .into_iter()
            .map(|r| {
                let label = if r.hidden { format!("Test {} (hidden)", r.case) } else { format!("Test {}", r.case) };
                view! {
                    <li class="test-result" class:test-result--passed=r.passed class:test-result--failed=!r.passed>
                        <span class="test-result__label">{label}</span>
                        {(!r.hidden)
                            .then(|| {
                                view! {
                                    <code class="test-result__io">
                                        {format!("{} → expected {}, got {}", r.input, r.expected, r.actual)}
                                    </code>
                                }
                            })}
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="solver">
            <section class="solver__statement card">
                <header class="solver__header">
                    <h1>{problem.title.clone()}</h1>
                    <span class=difficulty_class(problem.difficulty)>{problem.difficulty.as_str()}</span>
                    <span class="solver__category">{problem.category.clone()}</span>
                </header>
                <p>{problem.description.clone()}</p>
                <h3>"Examples"</h3>
                {problem
                    .examples
                    .iter()
                    .enumerate()
                    .map(|(i, ex)| {
                        view! {
                            <div class="solver__example">
                                <strong>{format!("Example {}", i + 1)}</strong>
                                <pre>{format!("Input: {}\nOutput: {}", ex.input, ex.output)}</pre>
                                {ex.explanation.clone().map(|e| view! { <p>{e}</p> })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <h3>"Constraints"</h3>
                <ul>{problem.constraints.iter().map(|c| view! { <li><code>{c.clone()}</code></li> }).collect::<Vec<_>>()}</ul>
                <button class="btn btn--ghost" on:click=move |_| solver.update(SolverState::toggle_hints)>
                    {move || if solver.get().hints_visible { "Hide hints" } else { "Show hints" }}
                </button>
                <Show when=move || solver.get().hints_visible>
                    <ol class="solver__hints">{hints}</ol>
                    <button class="btn btn--ghost" on:click=move |_| solver.update(SolverState::next_hint)>
                        "Next hint"
                    </button>
                </Show>
            </section>

            <section class="solver__editor card">
                <textarea
                    class="code-editor"
                    spellcheck="false"
                    prop:value=move || solver.get().code
                    on:input=move |ev| solver.update(|s| s.code = event_target_value(&ev))
                ></textarea>
                <div class="solver__actions">
                    <button class="btn" on:click=move |_| solver.update(SolverState::reset_code)>
                        "Reset"
                    </button>
                    <button class="btn btn--primary" disabled=move || !solver.get().can_run() on:click=move |_| run.run(())>
                        {move || if solver.get().running { "Running..." } else { "Run Tests" }}
                    </button>
                </div>
                <Show when=move || !solver.get().results.is_empty()>
                    <div class="solver__results">
                        <h3 class:solver__summary--passed=move || solver.get().all_passed()>
                            {move || solver.get().summary()}
                        </h3>
                        <ul>{results}</ul>
                    </div>
                </Show>
            </section>
        </div>
    }
        .into_any()
}
