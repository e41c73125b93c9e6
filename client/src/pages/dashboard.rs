//! Dashboard placeholder page.

use leptos::prelude::*;

/// Landing page at `/`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="page page--dashboard">
            <h1>"Dashboard"</h1>
            <p>"Welcome to the dashboard!"</p>
        </section>
    }
}
