//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::AppConfig;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, mock_interview::MockInterviewPage, practice::PracticePage,
    profile::ProfilePage, results::ResultsPage, room::RoomPage, session::SessionPage, solver::SolverPage,
    status::StatusPage,
};
use crate::state::interview::ResultsState;
use crate::state::progress::ProgressState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::LocalStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides UI, progress, and results state with the runtime config as
/// context, and sets up client-side routing. The first render uses defaults so
/// it matches the server's output; the stored theme and progress are read
/// from `localStorage` after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let progress = RwSignal::new(ProgressState::initial());
    let results = RwSignal::new(ResultsState::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|s| s.restore_theme(theme));
        progress.set(ProgressState::load(&LocalStore::open()));
    });

    provide_context(AppConfig::default());
    provide_context(ui);
    provide_context(progress);
    provide_context(results);

    view! {
        <Stylesheet id="leptos" href="/pkg/prepify.css"/>
        <Title text="Prepify"/>

        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("coding") view=PracticePage/>
                    <Route path=(StaticSegment("coding"), StaticSegment("solve")) view=SolverPage/>
                    <Route path=StaticSegment("interview") view=MockInterviewPage/>
                    <Route path=(StaticSegment("interview"), StaticSegment("session")) view=SessionPage/>
                    <Route path=(StaticSegment("interview"), StaticSegment("results")) view=ResultsPage/>
                    <Route
                        path=(StaticSegment("interview"), StaticSegment("room"), ParamSegment("room"))
                        view=RoomPage
                    />
                    <Route path=StaticSegment("status") view=StatusPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
