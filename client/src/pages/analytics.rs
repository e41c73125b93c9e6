//! Analytics placeholder page.

use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <section class="page page--analytics">
            <h1>"Analytics"</h1>
            <p>"Analytics page content will go here."</p>
        </section>
    }
}
