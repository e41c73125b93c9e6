//! Cases page: the case grid fed by the static provider.

use leptos::prelude::*;

use crate::components::cases_grid::CasesGrid;
use crate::services::case_service::get_cases;

#[component]
pub fn CasesPage() -> impl IntoView {
    view! {
        <section class="page page--cases">
            <CasesGrid cases=get_cases()/>
        </section>
    }
}
