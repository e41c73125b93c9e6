//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="page page--not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{move || pathname.get()}</code> "."</p>
            <a href="/">"Back to the dashboard"</a>
        </section>
    }
}
