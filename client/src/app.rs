//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{analytics::AnalyticsPage, cases::CasesPage, dashboard::DashboardPage, not_found::NotFoundPage};
use crate::state::ui::UiState;
use crate::util::theme;

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
/// Provides the shared UI state, mounts the navbar, and maps `/`, `/cases`
/// and `/analytics` to their pages. Anything else renders Not Found.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/casegrid.css"/>
        <Title text="Cases"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("cases") view=CasesPage/>
                        <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
